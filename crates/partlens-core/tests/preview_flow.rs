use egui::{Pos2, Rect, Vec2};

use partlens_core::bundle::ComponentBundle;
use partlens_core::export::ExportKind;
use partlens_core::selection::SelectionState;
use partlens_core::symbol::PinSide;
use partlens_core::view::{footprint2d, HitResult, PreviewScene};

const BUNDLE_JSON: &str = r##"{
  "name": "TLV1701",
  "packageType": "SOT-23-4",
  "pinCount": 4,
  "pins": [
    { "number": "1", "name": "VCC", "electricalRole": "power_in" },
    { "number": "2", "name": "GND", "electricalRole": "power_in" },
    { "number": "3", "name": "OUT", "electricalRole": "output" },
    { "number": "4", "name": "IN", "electricalRole": "input" }
  ],
  "footprintText": "(footprint \"SOT-23-4\"\n (pad \"1\" smd rect (at -2 0) (size 0.5 1.2))\n (pad \"2\" smd rect (at -2 1.27) (size 0.5 1.2))\n (pad \"3\" smd rect (at 2 0) (size 0.5 1.2))\n (pad \"4\" smd rect (at 2 1.27) (size 0.5 1.2))\n)",
  "symbolText": "(kicad_symbol_lib (symbol \"TLV1701\"))",
  "modelScript": "# model script\n"
}"##;

fn scene() -> PreviewScene {
    let bundle = ComponentBundle::from_json(BUNDLE_JSON).expect("bundle JSON parses");
    PreviewScene::from_bundle(bundle)
}

#[test]
fn parses_all_four_pads_with_exact_coordinates() {
    let scene = scene();
    let pads = &scene.geometry.pads;
    assert_eq!(pads.len(), 4);

    let expected = [
        ("1", -2.0, 0.0),
        ("2", -2.0, 1.27),
        ("3", 2.0, 0.0),
        ("4", 2.0, 1.27),
    ];
    for (pad, (number, x, y)) in pads.iter().zip(expected) {
        assert_eq!(pad.number, number);
        assert_eq!(pad.x, x);
        assert_eq!(pad.y, y);
        assert_eq!(pad.width, 0.5);
        assert_eq!(pad.height, 1.2);
    }
}

#[test]
fn symbol_sides_follow_role_heuristic() {
    let scene = scene();
    let side_of = |number: &str| {
        scene
            .symbol
            .slots
            .iter()
            .find(|s| s.pin.number == number)
            .map(|s| s.side)
            .unwrap()
    };
    assert_eq!(side_of("1"), PinSide::Left);
    assert_eq!(side_of("2"), PinSide::Left);
    assert_eq!(side_of("4"), PinSide::Left);
    assert_eq!(side_of("3"), PinSide::Right);
}

#[test]
fn clicking_pad_three_populates_the_info_lookup() {
    let scene = scene();
    let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 400.0));
    let transform = partlens_core::footprint::ViewTransform::fit(&scene.geometry, viewport);

    let pad3 = scene.geometry.pads.iter().find(|p| p.number == "3").unwrap();
    let click = transform.to_screen(pad3.x, pad3.y);

    let mut selection = SelectionState::default();
    match footprint2d::hit_test(click, &transform, &scene.geometry) {
        Some(number) => selection.apply(HitResult::Pin(number)),
        None => panic!("click at pad center must hit"),
    }

    let pin = selection.resolve(&scene.bundle).expect("selection resolves");
    assert_eq!(pin.name, "OUT");
    assert_eq!(pin.electrical_role.label(), "output");
}

#[test]
fn clicking_empty_space_clears_the_selection() {
    let scene = scene();
    let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 400.0));
    let transform = partlens_core::footprint::ViewTransform::fit(&scene.geometry, viewport);

    let mut selection = SelectionState::default();
    selection.select("3");

    // Far outside any pad: the view reports Background, which clears.
    let miss = footprint2d::hit_test(Pos2::new(1.0, 1.0), &transform, &scene.geometry);
    assert!(miss.is_none());
    selection.apply(HitResult::Background);
    assert!(selection.pin_number().is_none());
}

#[test]
fn export_blobs_are_passed_through_verbatim() {
    let scene = scene();
    assert_eq!(
        ExportKind::Footprint.blob(&scene.bundle),
        scene.bundle.footprint_text
    );
    assert!(ExportKind::Symbol.blob(&scene.bundle).contains("TLV1701"));
    assert_eq!(ExportKind::ModelScript.blob(&scene.bundle), "# model script\n");
}

#[test]
fn selection_resets_when_a_new_bundle_is_mounted() {
    use partlens_core::PartLensApp;

    let mut app = PartLensApp::new();
    assert!(app.selection().pin_number().is_none());

    let bundle = ComponentBundle::from_json(BUNDLE_JSON).unwrap();
    app.set_bundle(bundle);
    assert!(app.selection().pin_number().is_none());
    assert_eq!(app.scene().bundle.display_name(), "TLV1701");
}
