mod common;

use std::rc::Rc;

use common::*;
use keyboarding_core::{IbusAdaptor, KeyboardAdaptor, KeyboardController, XkbAdaptor};
use pretty_assertions::assert_eq;

struct Fixture {
    controller: KeyboardController,
    xkb: Rc<FakeXkb>,
    ibus: Rc<FakeEngines>,
    errors: Rc<RecordingErrorSink>,
}

fn fixture(xkb: Rc<FakeXkb>, ibus: Rc<FakeEngines>) -> Fixture {
    let xkb_adaptor: Rc<dyn KeyboardAdaptor> = Rc::new(XkbAdaptor::new(xkb.clone()));
    let ibus_adaptor: Rc<dyn KeyboardAdaptor> =
        Rc::new(IbusAdaptor::new(ibus.clone(), xkb.clone()));
    let errors = Rc::new(RecordingErrorSink::default());

    let mut controller = KeyboardController::new();
    controller.set_error_sink(errors.clone());
    controller.initialize(vec![xkb_adaptor, ibus_adaptor]).unwrap();
    Fixture {
        controller,
        xkb,
        ibus,
        errors,
    }
}

#[test]
fn activating_an_xkb_keyboard_switches_the_group() {
    let mut fx = fixture(
        FakeXkb::new(vec![
            xkb_layout(0, "us", None, "en-US"),
            xkb_layout(1, "de", None, "de-DE"),
        ]),
        FakeEngines::new(vec![]),
    );

    assert!(fx.controller.activate_keyboard("de-DE_de").unwrap());
    assert_eq!(fx.xkb.group.get(), Some(1));
    assert_eq!(fx.controller.active_keyboard().unwrap().id, "de-DE_de");
}

#[test]
fn ibus_activation_sets_the_matching_xkb_group() {
    let mut fx = fixture(
        FakeXkb::new(vec![
            xkb_layout(0, "us", None, "en-US"),
            xkb_layout(1, "de", None, "de-DE"),
            xkb_layout(2, "my", None, "my"),
        ]),
        FakeEngines::new(vec![engine("m17n:my:burmese", "Burmese", "my", "my")]),
    );

    // Activating the IBus keyboard alone is sufficient; the XKB group
    // follows the engine's declared layout.
    assert!(fx.controller.activate_keyboard("my_m17n:my:burmese").unwrap());
    assert_eq!(fx.xkb.group.get(), Some(2));
    assert_eq!(fx.ibus.active.borrow().as_deref(), Some("m17n:my:burmese"));
}

#[test]
fn ibus_activation_falls_back_to_the_default_layout_group() {
    let mut fx = fixture(
        FakeXkb::new(vec![
            xkb_layout(0, "de", None, "de-DE"),
            xkb_layout(1, "us", None, "en-US"),
        ]),
        FakeEngines::new(vec![engine("pinyin", "Pinyin", "zh", "zh-phonetic")]),
    );

    // "zh-phonetic" is not an installed XKB layout; the configured default
    // ("us") wins over the first installed keyboard.
    assert!(fx.controller.activate_keyboard("zh_pinyin").unwrap());
    assert_eq!(fx.xkb.group.get(), Some(1));
}

#[test]
fn ibus_activation_falls_back_to_the_first_installed_group() {
    let mut fx = fixture(
        FakeXkb::new(vec![
            xkb_layout(0, "de", None, "de-DE"),
            xkb_layout(1, "fr", None, "fr-FR"),
        ]),
        FakeEngines::new(vec![engine("pinyin", "Pinyin", "zh", "zh-phonetic")]),
    );

    assert!(fx.controller.activate_keyboard("zh_pinyin").unwrap());
    assert_eq!(fx.xkb.group.get(), Some(0));
}

#[test]
fn ibus_activation_with_no_installed_layouts_still_activates_the_engine() {
    let mut fx = fixture(
        FakeXkb::new(vec![]),
        FakeEngines::new(vec![engine("pinyin", "Pinyin", "zh", "us")]),
    );
    // No XKB keyboards at all: the group change is skipped, not an error.
    fx.xkb.available.set(true);

    assert!(fx.controller.activate_keyboard("zh_pinyin").unwrap());
    assert_eq!(fx.xkb.group.get(), None);
    assert_eq!(fx.ibus.active.borrow().as_deref(), Some("pinyin"));
}

#[test]
fn switching_between_two_ibus_engines_keeps_the_new_one_active() {
    let mut fx = fixture(
        FakeXkb::new(vec![xkb_layout(0, "us", None, "en-US")]),
        FakeEngines::new(vec![
            engine("m17n:my:burmese", "Burmese", "my", "us"),
            engine("pinyin", "Pinyin", "zh", "us"),
        ]),
    );

    assert!(fx.controller.activate_keyboard("my_m17n:my:burmese").unwrap());
    assert!(fx.controller.activate_keyboard("zh_pinyin").unwrap());

    // Activating the second engine already replaced the first; no explicit
    // deactivation may follow, or the daemon ends up with no engine at all.
    assert_eq!(fx.controller.active_keyboard().unwrap().id, "zh_pinyin");
    assert_eq!(fx.ibus.active.borrow().as_deref(), Some("pinyin"));
}

#[test]
fn activating_a_plain_xkb_keyboard_never_touches_ibus() {
    let mut fx = fixture(
        FakeXkb::new(vec![xkb_layout(0, "us", None, "en-US")]),
        FakeEngines::new(vec![engine("pinyin", "Pinyin", "zh", "us")]),
    );

    assert!(fx.controller.activate_keyboard("zh_pinyin").unwrap());
    assert!(fx.controller.activate_keyboard("en-US_us").unwrap());

    // Switching away deactivated the engine; nothing reactivated it.
    assert_eq!(fx.ibus.active.borrow().as_deref(), None);
    assert_eq!(fx.controller.active_keyboard().unwrap().id, "en-US_us");
}

#[test]
fn declined_activation_keeps_the_previous_keyboard() {
    let mut fx = fixture(
        FakeXkb::new(vec![xkb_layout(0, "us", None, "en-US")]),
        FakeEngines::new(vec![engine("pinyin", "Pinyin", "zh", "us")]),
    );

    assert!(fx.controller.activate_keyboard("en-US_us").unwrap());
    fx.ibus.accept_activation.set(false);

    assert!(!fx.controller.activate_keyboard("zh_pinyin").unwrap());
    assert_eq!(fx.controller.active_keyboard().unwrap().id, "en-US_us");
    assert_eq!(fx.errors.messages.borrow().len(), 1);
    assert!(fx.errors.messages.borrow()[0].contains("Pinyin"));
}

#[test]
fn unknown_identifiers_do_not_activate_anything() {
    let mut fx = fixture(
        FakeXkb::new(vec![xkb_layout(0, "us", None, "en-US")]),
        FakeEngines::new(vec![]),
    );

    assert!(!fx.controller.activate_keyboard("nope").unwrap());
    assert!(fx.controller.active_keyboard().is_none());
    // Not-found is a sentinel, not a user-facing failure.
    assert!(fx.errors.messages.borrow().is_empty());
}

#[test]
fn reactivating_the_active_keyboard_is_a_no_op() {
    let mut fx = fixture(
        FakeXkb::new(vec![xkb_layout(0, "us", None, "en-US")]),
        FakeEngines::new(vec![]),
    );

    assert!(fx.controller.activate_keyboard("en-US_us").unwrap());
    fx.xkb.group.set(None);

    assert!(fx.controller.activate_keyboard("en-US_us").unwrap());
    // No second native call was made.
    assert_eq!(fx.xkb.group.get(), None);
}

#[test]
fn activate_default_keyboard_uses_the_first_adaptor() {
    let mut fx = fixture(
        FakeXkb::new(vec![
            xkb_layout(0, "de", None, "de-DE"),
            xkb_layout(1, "us", None, "en-US"),
        ]),
        FakeEngines::new(vec![]),
    );

    assert!(fx.controller.activate_default_keyboard().unwrap());
    assert_eq!(fx.controller.active_keyboard().unwrap().id, "en-US_us");
    assert_eq!(fx.xkb.group.get(), Some(1));
}
