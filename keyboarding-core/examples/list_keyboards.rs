use std::rc::Rc;

use keyboarding_core::{
    EngineBackend, EngineInfo, IbusAdaptor, KeyboardAdaptor, KeyboardController, XkbAdaptor,
    XkbBackend, XkbLayoutInfo,
};

// Stand-ins for the native subsystems, so the demo runs anywhere.
struct DemoXkb;

impl XkbBackend for DemoXkb {
    fn is_available(&self) -> bool {
        true
    }

    fn layouts(&self) -> Vec<XkbLayoutInfo> {
        vec![
            XkbLayoutInfo {
                group: 0,
                name: "English (US)".to_string(),
                layout: "us".to_string(),
                variant: None,
                locale: "en-US".to_string(),
            },
            XkbLayoutInfo {
                group: 1,
                name: "German".to_string(),
                layout: "de".to_string(),
                variant: None,
                locale: "de-DE".to_string(),
            },
        ]
    }

    fn set_group(&self, _group: u32) -> bool {
        true
    }
}

struct DemoIbus;

impl EngineBackend for DemoIbus {
    fn is_available(&self) -> bool {
        true
    }

    fn engines(&self) -> Vec<EngineInfo> {
        vec![EngineInfo {
            longname: "m17n:my:burmese".to_string(),
            name: "Burmese".to_string(),
            language: "my".to_string(),
            layout: "us".to_string(),
        }]
    }

    fn activate_engine(&self, _longname: &str) -> bool {
        true
    }
}

fn main() {
    let xkb: Rc<DemoXkb> = Rc::new(DemoXkb);
    let xkb_adaptor: Rc<dyn KeyboardAdaptor> = Rc::new(XkbAdaptor::new(xkb.clone()));
    let ibus_adaptor: Rc<dyn KeyboardAdaptor> =
        Rc::new(IbusAdaptor::new(Rc::new(DemoIbus), xkb));

    let mut controller = KeyboardController::new();
    controller
        .initialize(vec![xkb_adaptor, ibus_adaptor])
        .expect("Failed to initialize keyboard controller");

    println!("Available keyboards:");
    println!("====================");
    for keyboard in controller.available_keyboards() {
        let kind = keyboard.adaptor.map(|k| k.name()).unwrap_or("-");
        println!("{} [{}] {}", keyboard.id, kind, keyboard.name);
    }

    let default = controller.default_keyboard();
    println!();
    println!("Default keyboard: {}", default.name);
}
