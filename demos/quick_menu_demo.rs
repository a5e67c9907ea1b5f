//! Headless quick menu walkthrough.
//!
//! Drives a menu with a scripted key sequence at a fixed 60 Hz step and logs
//! what happens. Run with `RUST_LOG=debug` to see every transition.
//!
//! An optional first argument names a JSON settings file.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use glam::Vec3;

use quick_menu::prelude::*;

const FRAME: Duration = Duration::from_micros(16_667);
const TOTAL_FRAMES: u64 = 600;

const MENU_JSON: &str = r#"{
    "name": "Quick Menu",
    "children": [
        { "name": "Cube", "children": [
            { "name": "Toggle" },
            { "name": "Move" },
            { "name": "Back", "back": true }
        ]},
        { "name": "Debug" },
        { "name": "Reload" },
        { "name": "Close", "back": true }
    ]
}"#;

/// Key events keyed by the frame they arrive on.
const SCRIPT: &[(u64, Key, ButtonState)] = &[
    (10, Key::Escape, ButtonState::Pressed),
    (11, Key::Escape, ButtonState::Released), // open
    (30, Key::Space, ButtonState::Pressed),
    (31, Key::Space, ButtonState::Released), // Cube
    (90, Key::Space, ButtonState::Pressed),
    (91, Key::Space, ButtonState::Released), // Cube/Toggle
    (130, Key::ArrowDown, ButtonState::Pressed),
    (131, Key::ArrowDown, ButtonState::Released),
    (150, Key::Space, ButtonState::Pressed),
    (151, Key::Space, ButtonState::Released), // Cube/Move
    (200, Key::Escape, ButtonState::Pressed),
    (201, Key::Escape, ButtonState::Released), // up to the top level
    (260, Key::ArrowDown, ButtonState::Pressed),
    (261, Key::ArrowDown, ButtonState::Released),
    (280, Key::Space, ButtonState::Pressed),
    (281, Key::Space, ButtonState::Released), // Debug
    (320, Key::ArrowDown, ButtonState::Pressed),
    (321, Key::ArrowDown, ButtonState::Released),
    (340, Key::Space, ButtonState::Pressed),
    (341, Key::Space, ButtonState::Released), // Reload
    (400, Key::Escape, ButtonState::Pressed),
    (401, Key::Escape, ButtonState::Released), // open again
    (430, Key::ArrowUp, ButtonState::Pressed),
    (431, Key::ArrowUp, ButtonState::Released), // wraps to Close
    (450, Key::Space, ButtonState::Pressed),
    (451, Key::Space, ButtonState::Released), // Close
];

#[derive(Debug, Default)]
struct Cube {
    active: bool,
    moving: bool,
    position: Vec3,
}

impl Cube {
    fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }
}

/// Triangle wave over `[0, length]`.
fn ping_pong(t: f32, length: f32) -> f32 {
    length - ((t % (length * 2.0)) - length).abs()
}

fn menu_clips() -> MenuClips {
    let select = AnimationClip::new(
        "select",
        vec![Track::linear(AnimatedProperty::SelectorBlend, &[(0.0, 1.0), (0.25, 0.0)])],
    );
    let decision = AnimationClip::new(
        "decision",
        vec![Track::linear(
            AnimatedProperty::SelectorOffset,
            &[(0.0, 0.2), (0.15, 0.6), (0.3, 0.2)],
        )],
    );
    let cancel = AnimationClip::empty("cancel", 0.3);
    MenuClips::new(select, decision, cancel)
}

fn build_menu(
    settings: &MenuSettings,
    cube: &Rc<RefCell<Cube>>,
    reload: &Rc<Cell<bool>>,
) -> anyhow::Result<QuickMenu> {
    let hierarchy = MenuHierarchy::from_json_str(MENU_JSON)?;

    // === Entry actions ===
    let toggle = hierarchy.find_by_path("Quick Menu/Cube/Toggle")?;
    let state = Rc::clone(cube);
    if let Some(action) = hierarchy.action(toggle) {
        action.subscribe(move |_| {
            let mut cube = state.borrow_mut();
            cube.active = !cube.active;
            log::info!("Cube active: {}", cube.active);
        });
    }

    let movement = hierarchy.find_by_path("Quick Menu/Cube/Move")?;
    let state = Rc::clone(cube);
    if let Some(action) = hierarchy.action(movement) {
        action.subscribe(move |_| {
            let mut cube = state.borrow_mut();
            cube.moving = !cube.moving;
            log::info!("Cube moving: {}", cube.moving);
        });
    }

    let reload_entry = hierarchy.find_by_path("Quick Menu/Reload")?;
    let flag = Rc::clone(reload);
    if let Some(action) = hierarchy.action(reload_entry) {
        action.subscribe(move |_| flag.set(true));
    }

    let menu = QuickMenu::builder()
        .hierarchy(hierarchy)
        .settings(settings.clone())
        .clips(menu_clips())
        .glyph_metrics(GlyphTable::monospace(' '..='~', 10.0))
        .build()?;

    // === Menu-wide callback ===
    menu.on_activated().subscribe(|entry| {
        log::info!("Menu callback: '{}' at depth {}", entry.name, entry.depth);
    });

    Ok(menu)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // === 1. Settings ===
    let settings = match std::env::args().nth(1) {
        Some(path) => MenuSettings::load(path)?,
        None => MenuSettings::default(),
    };

    // === 2. Scene state and menu ===
    let cube = Rc::new(RefCell::new(Cube::new()));
    let reload = Rc::new(Cell::new(false));
    let mut menu = build_menu(&settings, &cube, &reload)?;

    let mut clock = GameClock::new();
    let mut input = Input::new();

    // === 3. Fixed-step loop ===
    for frame in 0..TOTAL_FRAMES {
        clock.advance(FRAME);
        for &(_, key, state) in SCRIPT.iter().filter(|(at, ..)| *at == frame) {
            input.inject_key(key, state);
        }

        // Gameplay runs on scaled time and stops while the menu is open.
        {
            let mut cube = cube.borrow_mut();
            if cube.moving {
                cube.position.x = ping_pong(clock.time, 3.0);
            }
        }

        let buttons = menu.sample_input(&input);
        menu.frame(&buttons, &mut clock);

        if reload.replace(false) {
            log::info!("Reloading scene");
            clock.set_time_scale(1.0);
            menu.shutdown();
            *cube.borrow_mut() = Cube::new();
            menu = build_menu(&settings, &cube, &reload)?;
        }

        if frame % 60 == 0 {
            let cube = cube.borrow();
            log::info!(
                "frame {frame}: menu {:?} on '{}', time scale {}, cube active={} x={:.2}",
                menu.phase(),
                menu.current_name(),
                clock.time_scale(),
                cube.active,
                cube.position.x,
            );
        }

        input.start_frame();
    }

    menu.shutdown();
    Ok(())
}
