use glam::Vec3;
use scale_gizmo::axis::AxisMask;
use scale_gizmo::channel::ScaleChannel;
use scale_gizmo::config::ManipulatorConfig;
use scale_gizmo::events::{DragEvent, DragResponse, OrderedSignal};
use scale_gizmo::handles::factor_for_mask;
use scale_gizmo::registry::{HostKind, ManipulatorKind, ManipulatorRegistry};
use scale_gizmo::selection::TransformSelection;
use scale_gizmo::tool::{ChangedInput, Manipulator, ScaleTool};
use std::cell::RefCell;
use std::rc::Rc;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length_squared() <= 1e-10
}

fn unit_tool() -> ScaleTool {
    ScaleTool::new(TransformSelection::with_scale(Vec3::ONE), ManipulatorConfig::default())
}

#[test]
fn x_handle_drag_is_one_undoable_operation() {
    let mut tool = unit_tool();

    let response = tool.drag_begin(AxisMask::X);
    assert_eq!(response, DragResponse::Unhandled);
    tool.drag_move(factor_for_mask(AxisMask::X, 3.0));
    tool.drag_end();

    assert!(approx_vec3(tool.selection().scale(), Vec3::new(3.0, 1.0, 1.0)));
    assert_eq!(tool.undo_log().step_count(), 1);

    assert!(tool.undo());
    assert!(approx_vec3(tool.selection().scale(), Vec3::ONE));
    assert!(tool.redo());
    assert!(approx_vec3(tool.selection().scale(), Vec3::new(3.0, 1.0, 1.0)));
}

#[test]
fn every_move_of_a_drag_coalesces_into_one_step() {
    let mut tool = unit_tool();

    tool.drag_begin(AxisMask::XYZ);
    tool.drag_move(Vec3::splat(1.5));
    tool.drag_move(Vec3::splat(2.0));
    tool.drag_move(Vec3::splat(2.5));
    tool.drag_end();
    assert_eq!(tool.undo_log().step_count(), 1);
    assert!(approx_vec3(tool.selection().scale(), Vec3::splat(2.5)));

    tool.drag_begin(AxisMask::XYZ);
    tool.drag_move(Vec3::splat(0.5));
    tool.drag_end();
    assert_eq!(tool.undo_log().step_count(), 2);
    assert!(approx_vec3(tool.selection().scale(), Vec3::splat(1.25)));

    // One undo discards the whole second drag, not one move of it.
    assert!(tool.undo());
    assert!(approx_vec3(tool.selection().scale(), Vec3::splat(2.5)));
    assert!(tool.undo());
    assert!(approx_vec3(tool.selection().scale(), Vec3::ONE));
}

#[test]
fn a_new_drag_discards_the_previous_session() {
    let mut tool = unit_tool();

    tool.drag_begin(AxisMask::X);
    tool.drag_move(factor_for_mask(AxisMask::X, 2.0));

    // The host never ended the first drag; beginning a second one must
    // rebaseline from the current values.
    tool.drag_begin(AxisMask::Y);
    tool.drag_move(factor_for_mask(AxisMask::Y, 3.0));
    tool.drag_end();

    assert!(approx_vec3(tool.selection().scale(), Vec3::new(2.0, 3.0, 1.0)));
}

#[test]
fn programmatic_apply_matches_a_full_drag_cycle() {
    let mut tool = unit_tool();
    tool.apply_scale(Vec3::new(2.0, 2.0, 2.0));
    assert!(approx_vec3(tool.selection().scale(), Vec3::splat(2.0)));
    assert_eq!(tool.undo_log().step_count(), 1);

    tool.apply_scale(Vec3::new(3.0, 1.0, 1.0));
    assert!(approx_vec3(tool.selection().scale(), Vec3::new(6.0, 2.0, 2.0)));
    assert_eq!(tool.undo_log().step_count(), 2);

    assert!(tool.undo());
    assert!(approx_vec3(tool.selection().scale(), Vec3::splat(2.0)));
}

#[test]
fn driven_axes_survive_a_uniform_drag() {
    let mut selection = TransformSelection::new([
        ScaleChannel::Value(1.0),
        ScaleChannel::Driven(5.0),
        ScaleChannel::Value(1.0),
    ]);
    selection.time = 0.0;
    let mut tool = ScaleTool::new(selection, ManipulatorConfig::default());

    tool.drag_begin(AxisMask::XYZ);
    tool.drag_move(Vec3::splat(2.0));
    tool.drag_end();

    assert!(approx_vec3(tool.selection().scale(), Vec3::new(2.0, 5.0, 2.0)));
    assert_eq!(tool.usage().skipped_axis_writes, 1);
}

#[test]
fn usage_counters_track_the_lifecycle() {
    let mut tool = unit_tool();
    tool.drag_begin(AxisMask::X);
    tool.drag_move(factor_for_mask(AxisMask::X, 2.0));
    tool.drag_move(factor_for_mask(AxisMask::X, 3.0));
    tool.drag_end();
    tool.apply_scale(Vec3::splat(2.0));
    tool.undo();
    tool.redo();

    let usage = tool.usage();
    assert_eq!(usage.drag_begin_count, 1);
    assert_eq!(usage.drag_move_count, 2);
    assert_eq!(usage.drag_end_count, 1);
    assert_eq!(usage.programmatic_apply_count, 1);
    assert_eq!(usage.undo_count, 1);
    assert_eq!(usage.redo_count, 1);
}

#[test]
#[should_panic(expected = "without an active drag")]
fn drag_move_without_begin_is_a_contract_violation() {
    let mut tool = unit_tool();
    tool.drag_move(Vec3::ONE);
}

#[test]
fn handle_refresh_triggers_on_transform_inputs_only() {
    let tool = unit_tool();
    assert!(tool.affects_handle_refresh(ChangedInput::Transform));
    assert!(tool.affects_handle_refresh(ChangedInput::Pivot));
    assert!(tool.affects_handle_refresh(ChangedInput::TransformSpace));
    assert!(!tool.affects_handle_refresh(ChangedInput::EvaluationTime));
    assert!(!tool.affects_handle_refresh(ChangedInput::Other));
}

#[test]
fn registry_builds_the_scale_manipulator_for_both_hosts() {
    let registry = ManipulatorRegistry::with_defaults();
    assert!(registry.is_registered(ManipulatorKind::Scale, HostKind::Perspective3d));
    assert!(registry.is_registered(ManipulatorKind::Scale, HostKind::Ortho2d));
    assert!(!registry.is_registered(ManipulatorKind::Translate, HostKind::Perspective3d));

    let mut manipulator = registry
        .create(
            ManipulatorKind::Scale,
            HostKind::Ortho2d,
            TransformSelection::with_scale(Vec3::ONE),
            ManipulatorConfig::default(),
        )
        .expect("scale manipulator registered");

    manipulator.update_handles(40.0);
    assert!(manipulator.handle_frame().handles.iter().all(|handle| handle.raster_scale == 40.0));

    assert_eq!(manipulator.drag_begin(AxisMask::Z), DragResponse::Unhandled);
    manipulator.drag_move(factor_for_mask(AxisMask::Z, 2.0));
    manipulator.drag_end();

    assert!(registry
        .create(
            ManipulatorKind::Rotate,
            HostKind::Ortho2d,
            TransformSelection::with_scale(Vec3::ONE),
            ManipulatorConfig::default(),
        )
        .is_none());
}

#[test]
fn routed_events_drive_a_full_drag() {
    let mut tool = unit_tool();
    assert_eq!(
        tool.handle_drag_event(&DragEvent::Begin { mask: AxisMask::X }),
        DragResponse::Unhandled
    );
    assert_eq!(
        tool.handle_drag_event(&DragEvent::Move { factor: factor_for_mask(AxisMask::X, 3.0) }),
        DragResponse::Handled
    );
    assert_eq!(tool.handle_drag_event(&DragEvent::End), DragResponse::Unhandled);
    assert!(approx_vec3(tool.selection().scale(), Vec3::new(3.0, 1.0, 1.0)));
    assert_eq!(tool.undo_log().step_count(), 1);
}

#[test]
fn subscribers_run_in_priority_order_and_handled_stops_propagation() {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut signal: OrderedSignal<DragEvent> = OrderedSignal::new();

    // The handle's own slot connects first, but at a later group.
    let handle_log = Rc::clone(&log);
    signal.connect(1, move |_event| {
        handle_log.borrow_mut().push("handle");
        DragResponse::Unhandled
    });
    let tool_log = Rc::clone(&log);
    signal.connect(0, move |_event| {
        tool_log.borrow_mut().push("tool");
        DragResponse::Unhandled
    });

    let response = signal.emit(&DragEvent::Begin { mask: AxisMask::X });
    assert_eq!(response, DragResponse::Unhandled);
    assert_eq!(log.borrow().as_slice(), &["tool", "handle"]);

    log.borrow_mut().clear();
    let blocker_log = Rc::clone(&log);
    signal.connect(0, move |_event| {
        blocker_log.borrow_mut().push("blocker");
        DragResponse::Handled
    });

    let response = signal.emit(&DragEvent::End);
    assert_eq!(response, DragResponse::Handled);
    // The blocker shares the tool's group and joined it later, so it runs
    // second and the handle never sees the event.
    assert_eq!(log.borrow().as_slice(), &["tool", "blocker"]);
}

#[test]
fn drag_events_format_for_host_logs() {
    assert_eq!(DragEvent::Begin { mask: AxisMask::XY }.to_string(), "DragBegin mask=xy");
    assert_eq!(
        DragEvent::Move { factor: Vec3::new(2.0, 1.0, 1.0) }.to_string(),
        "DragMove factor=(2.000, 1.000, 1.000)"
    );
    assert_eq!(DragEvent::End.to_string(), "DragEnd");
}
