use std::cell::Cell;
use std::rc::Rc;

use portfolio_core::{IgnoreReason, Navigation, PageId};
use portfolio_web::{dom, navigation};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

use crate::fixture;

#[wasm_bindgen_test]
fn switching_activates_one_trigger_and_panel() {
    let controller = fixture::controller();
    let outcome = controller
        .borrow_mut()
        .switch_page(&PageId::from("research"));
    assert!(outcome.is_activated());
    assert_eq!(fixture::active_count("[data-page]"), 1);
    assert_eq!(fixture::active_count(".page"), 1);
    assert!(fixture::is_active("research"));
    assert_eq!(dom::current_fragment(), "#research");
    assert_eq!(fixture::breadcrumb(), "~/research");
}

#[wasm_bindgen_test]
fn unknown_page_clears_without_touching_fragment() {
    let controller = fixture::controller();
    controller
        .borrow_mut()
        .switch_page(&PageId::from("projects"));
    let outcome = controller.borrow_mut().switch_page(&PageId::from("nowhere"));
    assert!(matches!(outcome, Navigation::Cleared { .. }));
    assert_eq!(fixture::active_count("[data-page]"), 0);
    assert_eq!(fixture::active_count(".page"), 0);
    assert_eq!(dom::current_fragment(), "#projects");
}

#[wasm_bindgen_test]
fn projects_fragment_on_load_sets_breadcrumb() {
    let controller = fixture::controller();
    let outcome = controller.borrow_mut().load_from_fragment("#projects");
    assert!(outcome.is_activated());
    assert!(fixture::is_active("projects"));
    assert!(!fixture::is_active("home"));
    assert_eq!(fixture::breadcrumb(), "~/projects");
}

#[wasm_bindgen_test]
fn missing_fragment_keeps_markup_active_page() {
    let controller = fixture::controller();
    let outcome = controller.borrow_mut().load_from_fragment("");
    assert_eq!(
        outcome,
        Navigation::Ignored {
            reason: IgnoreReason::EmptyFragment
        }
    );
    assert!(fixture::is_active("home"));
    assert_eq!(
        controller.borrow().router().active(),
        Some(&PageId::from("home"))
    );
}

#[wasm_bindgen_test]
fn digit_three_matches_clicking_third_item() {
    let keyed = fixture::controller();
    navigation::wire_nav_items(&keyed);
    navigation::handle_key(&keyed, "3");
    assert!(fixture::is_active("competitions"));
    let keyed_breadcrumb = fixture::breadcrumb();

    let clicked = fixture::controller();
    navigation::wire_nav_items(&clicked);
    clicked.borrow().nav_item(2).expect("third item").click();
    assert!(fixture::is_active("competitions"));
    assert_eq!(fixture::breadcrumb(), keyed_breadcrumb);
    assert_eq!(
        keyed.borrow().router().active(),
        clicked.borrow().router().active()
    );
}

#[wasm_bindgen_test]
fn detail_button_navigates_without_reaching_card() {
    let controller = fixture::controller();
    navigation::wire_project_details(&fixture::document(), &controller);

    let card_clicked = Rc::new(Cell::new(false));
    let seen = card_clicked.clone();
    let card = fixture::document()
        .query_selector(".project-card")
        .expect("query card")
        .expect("card exists");
    dom::listen(&card, "click", move |_event| seen.set(true));

    let button = fixture::document()
        .query_selector(".view-details-btn")
        .expect("query button")
        .expect("button exists");
    button.unchecked_into::<HtmlElement>().click();

    assert!(!card_clicked.get());
    assert!(fixture::is_active("project-2"));
    assert_eq!(dom::current_fragment(), "#project-2");
    assert_eq!(fixture::breadcrumb(), "~");
}

#[wasm_bindgen_test]
fn own_fragment_write_is_ignored_on_hashchange() {
    let controller = fixture::controller();
    controller
        .borrow_mut()
        .switch_page(&PageId::from("experience"));
    assert_eq!(
        controller.borrow().router().pending_echo(),
        Some(&PageId::from("experience"))
    );
    let outcome = controller
        .borrow_mut()
        .on_fragment_change(&dom::current_fragment());
    assert_eq!(
        outcome,
        Navigation::Ignored {
            reason: IgnoreReason::Echo(PageId::from("experience"))
        }
    );
    assert!(fixture::is_active("experience"));
}

#[wasm_bindgen_test]
async fn edited_fragment_navigates_through_hashchange() {
    let controller = fixture::controller();
    let win = dom::window().expect("window");

    // Scoped to this test so later hashchanges don't reach this controller.
    let shared = controller.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        navigation::follow_fragment(&shared);
    });
    win.add_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref())
        .expect("add listener");

    win.location().set_hash("research").expect("set hash");
    dom::sleep_ms(50).await.expect("sleep");
    assert!(fixture::is_active("research"));
    assert_eq!(fixture::breadcrumb(), "~/research");

    win.location().set_hash("ghost").expect("set hash");
    dom::sleep_ms(50).await.expect("sleep");
    assert!(fixture::is_active("research"));

    win.remove_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref())
        .expect("remove listener");
}
