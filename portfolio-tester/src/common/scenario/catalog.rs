use super::CombinedScenario;
use super::display::{HelpOverlayScenario, StatsCounterScenario};
use super::navigation::{
    FragmentEchoScenario, HashLoadScenario, InvalidPageScenario, KeyboardShortcutsScenario,
    ProjectDetailScenario, SmokeScenario,
};

const CATALOG: [(&str, &str); 8] = [
    ("smoke", "Site loads with exactly one page active"),
    ("hash-load", "A #page fragment on load activates that page"),
    (
        "keyboard-shortcuts",
        "Digit keys select pages in navigation order",
    ),
    ("invalid-page", "Unknown page ids clear everything"),
    (
        "fragment-echo",
        "Own fragment writes are no-ops; history steps navigate",
    ),
    ("project-detail", "Detail buttons open project-<n> pages"),
    ("stats-counter", "Stats count up once and restore their text"),
    ("help-overlay", "H opens the shortcut overlay; a click closes it"),
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

#[must_use]
pub fn scenario_names() -> Vec<String> {
    CATALOG.iter().map(|(name, _)| (*name).to_string()).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario>> {
    let scenario: Box<dyn CombinedScenario> = match name {
        "smoke" => Box::new(SmokeScenario),
        "hash-load" => Box::new(HashLoadScenario),
        "keyboard-shortcuts" => Box::new(KeyboardShortcutsScenario),
        "invalid-page" => Box::new(InvalidPageScenario),
        "fragment-echo" => Box::new(FragmentEchoScenario),
        "project-detail" => Box::new(ProjectDetailScenario),
        "stats-counter" => Box::new(StatsCounterScenario),
        "help-overlay" => Box::new(HelpOverlayScenario),
        _ => return None,
    };
    Some(scenario)
}
