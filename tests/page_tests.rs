// Anchors, motion preference and parameter validation.

use pagefx_core::*;

#[test]
fn fragment_target_requires_a_name() {
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("#process"), Some("#process"));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Target(u8);

#[test]
fn matching_fragment_scrolls_target() {
    let mut looked_up = None;
    let click = resolve_anchor_click("#process", |fragment| {
        looked_up = Some(fragment.to_owned());
        Some(Target(3))
    });
    assert_eq!(click, AnchorClick::Scroll(Target(3)));
    assert_eq!(looked_up.as_deref(), Some("#process"));
}

#[test]
fn unmatched_fragment_follows_link() {
    let click = resolve_anchor_click("#missing", |_| None::<Target>);
    assert_eq!(click, AnchorClick::FollowLink);
}

#[test]
fn empty_fragment_skips_lookup() {
    for hash in ["", "#"] {
        let click = resolve_anchor_click(hash, |_| -> Option<Target> {
            panic!("no lookup for {hash:?}")
        });
        assert_eq!(click, AnchorClick::FollowLink);
    }
}

#[derive(Default)]
struct RecordingPage {
    calls: Vec<&'static str>,
}

impl MotionHost for RecordingPage {
    fn remove_canvas(&mut self) {
        self.calls.push("remove_canvas");
    }
    fn start_particles(&mut self) {
        self.calls.push("particles");
    }
    fn start_parallax(&mut self) {
        self.calls.push("parallax");
    }
}

#[test]
fn reduced_motion_removes_canvas_and_starts_no_loop() {
    let mut page = RecordingPage::default();
    install_motion_effects(MotionPreference::Reduced, &mut page);
    assert_eq!(page.calls, vec!["remove_canvas"]);
}

#[test]
fn full_motion_starts_both_loops_and_keeps_canvas() {
    let mut page = RecordingPage::default();
    install_motion_effects(MotionPreference::Full, &mut page);
    assert_eq!(page.calls, vec!["particles", "parallax"]);
}

#[test]
fn reduced_motion_disables_animations() {
    let reduced = MotionPreference::from_reduce_matches(true);
    assert_eq!(reduced, MotionPreference::Reduced);
    assert!(!reduced.animations_enabled());
    assert!(MotionPreference::from_reduce_matches(false).animations_enabled());
}

#[test]
fn default_params_are_valid() {
    assert_eq!(FieldParams::default().validate(), Ok(()));
    assert_eq!(ParallaxParams::default().validate(), Ok(()));
    assert_eq!(RevealParams::default().validate(), Ok(()));
}

#[test]
fn invalid_field_params_are_rejected() {
    let zero = FieldParams {
        target_count: 0,
        ..FieldParams::default()
    };
    assert_eq!(zero.validate(), Err(ParamsError::ZeroTargetCount));

    let no_decay = FieldParams {
        opacity_decay: 0.0,
        ..FieldParams::default()
    };
    assert_eq!(no_decay.validate(), Err(ParamsError::InvalidDecay(0.0)));

    let bad_radius = FieldParams {
        radius_min: -1.0,
        ..FieldParams::default()
    };
    assert!(matches!(
        bad_radius.validate(),
        Err(ParamsError::InvalidRadius { .. })
    ));
}

#[test]
fn non_finite_speed_is_rejected() {
    let params = ParallaxParams {
        geometry_speed: f64::NAN,
        ..ParallaxParams::default()
    };
    let err = params.validate().unwrap_err();
    assert!(err.to_string().starts_with("geometry_speed must be finite"));
}

#[test]
fn reveal_threshold_must_be_a_ratio() {
    let params = RevealParams { threshold: 1.5 };
    assert_eq!(
        params.validate(),
        Err(ParamsError::ThresholdOutOfRange(1.5))
    );
}
