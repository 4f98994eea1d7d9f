//! End-to-end tests driving a session through command strings

use lin_alg::f64::Vec3;
use sketch_cgo::{wire_box, CgoOp, DEFAULT_LINE_WIDTH};
use sketch_cmd::{CmdError, CommandExecutor, OutputKind, SketchConfig};
use sketch_color::Color;
use sketch_geom::{find_bounding_box, AtomSource, BoxLayout, BoxOutput, State};
use sketch_scene::{Molecule, Session};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two-state molecule: a carbon pair shifted along y in state 2
fn session() -> Session {
    let mut session = Session::new();
    let mut mol = Molecule::from_atoms(
        "pair",
        [
            ("C1", 12.0, Vec3::new(0.0, 0.0, 0.0)),
            ("C2", 12.0, Vec3::new(2.0, 0.0, 0.0)),
        ],
    );
    mol.add_state(vec![Vec3::new(0.0, 4.0, 0.0), Vec3::new(2.0, 6.0, 0.0)])
        .unwrap();
    session.load_molecule(mol);
    session
}

fn sphere_of(session: &Session, name: &str, state: usize) -> (Vec3, f64) {
    let cgo = session.cgo(name).and_then(|o| o.state(state)).unwrap();
    cgo.ops()
        .iter()
        .find_map(|op| match op {
            CgoOp::Sphere { center, radius } => Some((*center, *radius)),
            _ => None,
        })
        .unwrap()
}

#[test]
fn test_scom_prints_center() {
    init();
    let mut session = session();
    let executor = CommandExecutor::new();

    let output = executor
        .do_with_options(&mut session, "sketch_scom pair, radius=2, color=red", false)
        .unwrap();
    assert_eq!(output.lines(), vec!["Center of mass: 1.000, 0.000, 0.000"]);

    let (center, radius) = sphere_of(&session, "com01", 1);
    assert_eq!((center.x, center.y, radius), (1.0, 0.0, 2.0));
    let cgo = session.cgo("com01").and_then(|o| o.state(1)).unwrap();
    assert!(matches!(cgo.ops()[1], CgoOp::Color(c) if c == Color::RED));
}

#[test]
fn test_quiet_and_verbose_off() {
    let mut session = session();
    let executor = CommandExecutor::new();

    let quiet = executor
        .do_with_options(&mut session, "sketch_scoc pair", true)
        .unwrap();
    assert!(quiet.is_empty());

    let silent = executor
        .do_with_options(&mut session, "sketch_scoc pair, verbose=0", false)
        .unwrap();
    assert!(silent.is_empty());
    assert!(session.cgo("coc01").is_some());
    assert!(session.cgo("coc02").is_some());
}

#[test]
fn test_scoc_all_states() {
    let mut session = session();
    let executor = CommandExecutor::new();

    let output = executor
        .do_with_options(&mut session, "sketch_scoc pair, state=0, name=track", false)
        .unwrap();
    assert_eq!(output.messages.len(), 2);
    assert_eq!(session.cgo("track").map(|o| o.state_count()), Some(2));
    assert_eq!(sphere_of(&session, "track", 2).0.y, 5.0);
}

#[test]
fn test_pcoc_follows_states() {
    let mut session = session();
    let executor = CommandExecutor::new();

    executor.do_(&mut session, "sketch_pcoc pair").unwrap();
    let marker = session.molecule("pair_coc").unwrap();
    assert_eq!(marker.state_count(), 2);
    assert_eq!(marker.coords(2).unwrap()[0].y, 5.0);

    executor.do_(&mut session, "sketch_pcom pair and name C2, state=1").unwrap();
    let marker = session.molecule("pair_and_name_C2_com").unwrap();
    assert_eq!(marker.coords(1).unwrap()[0].x, 2.0);
}

#[test]
fn test_bbox_summary() {
    let mut session = session();
    let executor = CommandExecutor::new();

    let output = executor
        .do_with_options(&mut session, "sketch_bbox pair, state=2, padding=1, linewidth=3", false)
        .unwrap();
    assert_eq!(output.lines(), vec!["Bounding box: 4.000, 4.000, 2.000"]);

    let cgo = session.cgo("bbox01").and_then(|o| o.state(1)).unwrap();
    assert!(matches!(cgo.ops()[1], CgoOp::LineWidth(w) if w == 3.0));
}

#[test]
fn test_rgyr_and_arrow() {
    let mut session = session();
    let executor = CommandExecutor::new();

    let output = executor
        .do_with_options(&mut session, "sketch_rgyr pair", false)
        .unwrap();
    assert_eq!(output.lines(), vec!["Radius of gyration: 1.000"]);

    executor
        .do_(&mut session, "sketch_arrow (0, 0, 0), [0, 0, 5], radius=0.5, color=(1, 0, 0)")
        .unwrap();
    let arrow = session.cgo("arrow01").and_then(|o| o.state(1)).unwrap();
    assert!(matches!(arrow.ops()[1], CgoOp::Cylinder { .. }));
    assert!(matches!(arrow.ops()[2], CgoOp::Cone { .. }));
}

#[test]
fn test_cgo_loads_do_not_zoom() {
    let mut session = session();
    let executor = CommandExecutor::new();
    let zooms = session.zoom_count();

    executor
        .do_multi(&mut session, "sketch_scom pair; sketch_bbox pair\nsketch_rgyr pair")
        .unwrap();
    assert_eq!(session.zoom_count(), zooms);
    assert_eq!(session.settings().get_int("auto_zoom").unwrap(), -1);
}

#[test]
fn test_errors() {
    let mut session = session();
    let executor = CommandExecutor::new();

    assert!(matches!(
        executor.do_(&mut session, "sketch_circle pair"),
        Err(CmdError::UnknownCommand(_))
    ));
    assert!(matches!(
        executor.do_(&mut session, "sketch_scom"),
        Err(CmdError::MissingArgument(_))
    ));
    assert!(matches!(
        executor.do_(&mut session, "sketch_scom pair, size=3"),
        Err(CmdError::InvalidArgument { .. })
    ));
    assert!(matches!(
        executor.do_(&mut session, "sketch_scom pair, color=nocolor"),
        Err(CmdError::Color(_))
    ));
    assert!(matches!(
        executor.do_(&mut session, "sketch_bbox missing"),
        Err(CmdError::Geometry(_))
    ));
    assert!(session.cgo("com01").is_none());
    assert!(session.cgo("bbox01").is_none());
    assert_eq!(session.count_states(), 2);
}

#[test]
fn test_config_defaults() {
    let config = SketchConfig::from_json(
        r#"{ "verbose": false, "sphere": { "com_prefix": "mass", "radius": 3.0 } }"#,
    )
    .unwrap();
    let executor = CommandExecutor::with_config(config);
    let mut session = session();

    let output = executor
        .do_with_options(&mut session, "sketch_scom pair", false)
        .unwrap();
    assert!(output.is_empty());
    assert_eq!(sphere_of(&session, "mass01", 1).1, 3.0);
}

#[test]
fn test_wire_box_from_bounding_box() {
    let mut session = Session::new();
    session.load_molecule(Molecule::from_atoms(
        "blk",
        [
            ("A", 1.0, Vec3::new(0.0, 0.0, 0.0)),
            ("B", 1.0, Vec3::new(1.0, 2.0, 3.0)),
        ],
    ));

    let vertices = match find_bounding_box(&session, "blk", State::Current, 0.0, BoxLayout::Vertices) {
        Ok(BoxOutput::Vertices(vertices)) => vertices,
        other => panic!("expected vertices, got {:?}", other),
    };
    let cgo = wire_box(&vertices, Color::GRAY, DEFAULT_LINE_WIDTH);
    assert!(matches!(cgo.ops()[0], CgoOp::LineWidth(w) if w == DEFAULT_LINE_WIDTH));
    assert_eq!(cgo.count(|op| matches!(op, CgoOp::Vertex(_))), 24);

    let points: Vec<(f64, f64, f64)> = cgo
        .ops()
        .iter()
        .filter_map(|op| match op {
            CgoOp::Vertex(v) => Some((v.x, v.y, v.z)),
            _ => None,
        })
        .collect();

    // Corners 1..8 of the box spanning (0, 0, 0) to (1, 2, 3)
    let corner = [
        (0.0, 2.0, 0.0),
        (1.0, 2.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 0.0, 0.0),
        (0.0, 2.0, 3.0),
        (1.0, 2.0, 3.0),
        (1.0, 0.0, 3.0),
        (0.0, 0.0, 3.0),
    ];
    let edges = [
        (1, 2), (2, 3), (3, 4), (4, 1),
        (5, 6), (6, 7), (7, 8), (8, 5),
        (1, 5), (4, 8), (2, 6), (3, 7),
    ];
    let expected: Vec<(f64, f64, f64)> = edges
        .iter()
        .flat_map(|&(a, b)| [corner[a - 1], corner[b - 1]])
        .collect();
    assert_eq!(points, expected);
}

#[test]
fn test_arrow_with_coincident_points() {
    let mut session = session();
    let executor = CommandExecutor::new();

    let output = executor
        .do_with_options(&mut session, "sketch_arrow (1, 1, 1), (1, 1, 1)", true)
        .unwrap();
    assert_eq!(output.messages.len(), 1);
    assert_eq!(output.messages[0].kind, OutputKind::Warning);

    let cgo = session.cgo("arrow01").and_then(|o| o.state(1)).unwrap();
    assert!(cgo.to_floats().iter().all(|f| f.is_finite()));
}
