use portfolio_core::SiteConfig;
use portfolio_web::controller::{Controller, SharedController};
use portfolio_web::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const FIXTURE_ID: &str = "portfolio-fixture";

const MARKUP: &str = r#"
<nav>
  <div class="nav-item active" data-page="home">home</div>
  <div class="nav-item" data-page="projects">projects</div>
  <div class="nav-item" data-page="competitions">competitions</div>
  <div class="nav-item" data-page="experience">experience</div>
  <div class="nav-item" data-page="research">research</div>
  <span class="detail-link" data-page="project-2" hidden></span>
</nav>
<header><span id="clock"></span></header>
<section class="page active" id="home">
  <div class="panel" id="panel-about">
    <div class="stat-value" id="stat-projects">150+</div>
    <div class="stat-value" id="stat-infinite">∞</div>
  </div>
  <div class="panel" id="panel-skills">
    <div class="skills-tags"><span id="skill-rust">Rust</span></div>
    <div class="social-links"><a id="social-github" href="https://github.com">github</a></div>
  </div>
</section>
<section class="page" id="projects">
  <div class="project-card" id="card-2" data-project="2">
    <span class="project-icon" id="icon-2">*</span>
    <button class="view-details-btn">details</button>
  </div>
</section>
<section class="page" id="competitions"></section>
<section class="page" id="experience"></section>
<section class="page" id="research"></section>
<section class="page" id="project-2"></section>
<footer><span id="current-path">~</span></footer>
"#;

pub fn document() -> Document {
    dom::document().expect("document")
}

/// Replace any previous fixture with fresh markup and a clean fragment.
pub fn install() -> Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(FIXTURE_ID) {
        old.remove();
    }
    let _ = dom::window()
        .expect("window")
        .location()
        .set_hash("");
    let root = doc.create_element("div").expect("create fixture root");
    root.set_id(FIXTURE_ID);
    root.set_inner_html(MARKUP);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append fixture");
    root
}

pub fn controller() -> SharedController {
    install();
    Controller::new(&document(), SiteConfig::default()).into_shared()
}

pub fn by_id(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .expect("fixture element")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

pub fn active_count(selector: &str) -> usize {
    dom::query_all(&document(), selector)
        .into_iter()
        .filter(|el| el.class_list().contains("active"))
        .count()
}

pub fn is_active(id: &str) -> bool {
    by_id(id).class_list().contains("active")
}

pub fn breadcrumb() -> String {
    by_id("current-path").text_content().unwrap_or_default()
}

pub fn style_of(id: &str, property: &str) -> String {
    by_id(id)
        .style()
        .get_property_value(property)
        .unwrap_or_default()
}

pub fn dispatch(id: &str, event: &str) {
    let event = web_sys::Event::new(event).expect("create event");
    by_id(id).dispatch_event(&event).expect("dispatch event");
}
