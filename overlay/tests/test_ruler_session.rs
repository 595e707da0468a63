// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A ruler session the way a host drives it: settings on disk, shortcuts arriving over a
//! channel, the magnifier following the cursor, and a restart that brings everything
//! back.

use std::{sync::mpsc::channel, time::Instant};

use r3bl_ruler_overlay::{CommonResult, ConfigStore, InMemoryConfigStore,
                         InMemoryHotkeyRegistry, JsonFileConfigStore, KeyBinding, Magnifier,
                         MagnifierView, MeasurementUnit, Modifiers, MonitorRect, PhysicalRect,
                         PixelBuffer, PixelFormat, Rgb, Rotation, RulerConfig, RulerController,
                         ShortcutOutcome, StaticScreenCapture, TestClipboard, assert_eq2, pt,
                         register_shortcuts, try_create_temp_dir};

fn primary() -> MonitorRect {
    MonitorRect::new(PhysicalRect::new(0.0, 0.0, 1920.0, 1080.0), 1.0)
}

fn ctrl(key: &str) -> KeyBinding {
    KeyBinding::new(
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
        key,
    )
}

#[test]
fn test_settings_survive_restart() {
    let temp_dir = try_create_temp_dir().unwrap();
    let path = temp_dir.join("ruler-overlay").join("config.json");

    let mut controller = RulerController::new(JsonFileConfigStore::new(&path));
    // First run writes the defaults out.
    assert!(path.exists());

    controller.set_rotation(30.0);
    controller.set_unit(MeasurementUnit::Centimeters);
    controller.set_position(pt(321.4, 87.6));
    controller.cycle_opacity();

    let restarted = RulerController::new(JsonFileConfigStore::new(&path));
    assert_eq2!(restarted.state().rotation.degrees(), 30.0);
    assert_eq2!(restarted.state().unit, MeasurementUnit::Centimeters);
    assert_eq2!(restarted.state().position, pt(321, 88));
    assert_eq2!(restarted.state().opacity, 80);
    assert_eq2!(restarted.frame().markings.summary.text, "13.23 cm");
}

#[test]
fn test_broken_settings_file_falls_back_to_defaults() {
    let temp_dir = try_create_temp_dir().unwrap();
    let path = temp_dir.join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileConfigStore::new(&path);
    assert!(store.try_load().is_err());
    let controller = RulerController::new(store);
    assert_eq2!(controller.state().width, 500.0);

    // Left alone, so the user can fix it by hand.
    assert_eq2!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_global_shortcuts_drive_the_controller() {
    let temp_dir = try_create_temp_dir().unwrap();
    let mut controller =
        RulerController::new(JsonFileConfigStore::new(temp_dir.join("config.json")));

    let (sender, receiver) = channel();
    let mut registry = InMemoryHotkeyRegistry::default();
    let report = register_shortcuts(&mut registry, &controller.state().shortcuts, &sender);
    assert!(report.is_complete());

    assert!(registry.press(&ctrl("T")));
    assert!(registry.press(&ctrl("C")));
    assert!(registry.press(&ctrl("Q")));

    let mut clipboard = TestClipboard::default();
    let outcomes: Vec<ShortcutOutcome> = receiver
        .try_iter()
        .map(|action| controller.handle_shortcut(action, &mut clipboard, &primary()))
        .collect();

    assert_eq2!(
        outcomes,
        vec![
            ShortcutOutcome::Handled,
            ShortcutOutcome::Copied {
                toast: "Copied: 500 px".into()
            },
            ShortcutOutcome::Quit,
        ]
    );
    assert_eq2!(controller.state().opacity, 80);
    assert_eq2!(clipboard.content, "500 px");
}

#[test]
fn test_magnifier_follows_cursor_near_edge() {
    let desktop = PixelBuffer::filled(800, 600, PixelFormat::Bgra8, Rgb::new(10, 200, 30));
    let mut magnifier = Magnifier::new(StaticScreenCapture::new(desktop), 4);

    let mut controller = RulerController::new(InMemoryConfigStore::default());
    controller.set_position(pt(200, 100));
    controller.toggle_magnifier();

    let work_area = primary().work_area;
    let state = controller.state();

    // 5 below the top edge of the ruler, 100 along it.
    let near = controller.cursor_context(pt(300, 105), work_area);
    assert_eq2!(
        magnifier.track(state.magnifier_enabled, near, state.unit, state.ppi),
        MagnifierView::Shown {
            placement: pt(1710, 870),
            readout: "100px".into(),
            zoom: 4,
            rotation: Rotation::default(),
        }
    );

    let frame = magnifier.tick(pt(300, 105), Instant::now()).unwrap();
    assert_eq2!((frame.width(), frame.height()), (200, 200));
    assert_eq2!(frame.pixel(0, 0), Some(Rgb::new(10, 200, 30)));

    // Middle of the ruler is not near any edge.
    let middle = controller.cursor_context(pt(450, 145), work_area);
    assert_eq2!(
        magnifier.track(state.magnifier_enabled, middle, state.unit, state.ppi),
        MagnifierView::Hidden
    );
    assert!(magnifier.frame().is_none());
}

#[test]
fn test_point_to_point_uses_ruler_unit() {
    let mut controller = RulerController::new(InMemoryConfigStore::default());
    controller.set_unit(MeasurementUnit::Inches);
    controller.set_ppi(120.0);

    let mut measurement = controller.point_to_point();
    measurement.start(pt(0, 0));
    measurement.update(pt(180, 240));
    measurement.end();
    assert_eq2!(measurement.distance_label(), "2.50 in");
}

#[test]
fn test_host_supplied_store() {
    // Any store works, including one the host writes itself.
    #[derive(Debug, Default)]
    struct CountingStore {
        loads: usize,
    }
    impl ConfigStore for CountingStore {
        fn load(&mut self) -> RulerConfig {
            self.loads += 1;
            RulerConfig::default()
        }

        fn save(&mut self, _config: &RulerConfig) -> CommonResult<()> { Ok(()) }
    }

    let controller = RulerController::new(CountingStore::default());
    assert_eq2!(controller.store().loads, 1);
}
