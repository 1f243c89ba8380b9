#[cfg(test)]
mod tests {
    use test_case::test_case;

    use starform::engine::{IgnoreReason, RejectReason, Status};
    use starform::geometry::geo_traits::Shape;
    use starform::geometry::primitives::{Point, Polygon, Rect};
    use starform::session::{
        Command, CommandKind, InputSnapshot, Key, KeyTracker, Mode, Session, Subject,
        TypedCommand, Viewport,
    };
    use starform::util::assertions::{points_almost_equal, polygons_almost_equal};

    fn session() -> Session {
        Session::from_viewport(&Viewport::new(1920, 1080)).unwrap()
    }

    fn typed(kind: CommandKind, value: &str) -> TypedCommand {
        TypedCommand::new(kind, value)
    }

    #[test]
    fn viewport_derivation() {
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(viewport.panel_width(), 480);
        assert_eq!(viewport.embed_width(), 1440);
        assert_eq!(
            viewport.bounds().unwrap(),
            Rect::from_borders(0.0, 1436.0, 1080.0, 0.0).unwrap()
        );

        let star = viewport.initial_star();
        assert_eq!(star.center, Point(720.0, 540.0));
        assert_eq!(star.inner_radius, 28.8);
        assert_eq!(star.outer_radius, 72.0);
        assert_eq!(star.n_points, 5);
    }

    #[test]
    fn viewport_too_narrow_for_the_panel() {
        assert!(Viewport::new(4, 600).bounds().is_err());
    }

    #[test]
    fn fresh_session() {
        let session = session();
        assert_eq!(session.mode(), Mode::Shape);
        assert_eq!(session.shape().n_vertices(), 10);
        assert_eq!(session.anchor(), Point(720.0, 540.0));
        assert!(points_almost_equal(session.shape().centroid(), session.anchor()));
        assert!(matches!(session.subject(), Subject::Shape(_)));
    }

    #[test_case(CommandKind::MoveHorizontal, "15", (15.0, 0.0); "right")]
    #[test_case(CommandKind::MoveHorizontal, "-15", (-15.0, 0.0); "left")]
    #[test_case(CommandKind::MoveVertical, "10", (0.0, -10.0); "up is towards smaller y")]
    #[test_case(CommandKind::MoveVertical, "-10", (0.0, 10.0); "down is towards larger y")]
    fn typed_moves_shift_the_shape(kind: CommandKind, value: &str, (dx, dy): (f64, f64)) {
        let mut session = session();
        let before = session.shape().centroid();
        assert_eq!(session.submit(&typed(kind, value)), Status::Applied);
        let after = session.shape().centroid();
        assert!(points_almost_equal(after, Point(before.x() + dx, before.y() + dy)));
        // the anchor only follows in text mode
        assert_eq!(session.anchor(), Point(720.0, 540.0));
    }

    #[test]
    fn move_out_of_the_viewport_is_rejected() {
        let mut session = session();
        let before = session.clone();
        let status = session.submit(&typed(CommandKind::MoveHorizontal, "5000"));
        assert_eq!(status, Status::Rejected(RejectReason::OutOfBounds));
        assert_eq!(session, before);
    }

    #[test_case(CommandKind::MoveHorizontal, "1.5"; "real move")]
    #[test_case(CommandKind::MoveVertical, "up"; "word")]
    #[test_case(CommandKind::ScaleHorizontal, ""; "empty scale")]
    #[test_case(CommandKind::ScaleVertical, "NaN"; "nan scale")]
    #[test_case(CommandKind::Rotate, "ninety"; "word rotate")]
    fn malformed_input_changes_nothing(kind: CommandKind, value: &str) {
        let mut session = session();
        let before = session.clone();
        assert_eq!(
            session.submit(&typed(kind, value)),
            Status::Ignored(IgnoreReason::MalformedInput)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn unknown_reflection_axis_changes_nothing() {
        let mut session = session();
        let before = session.clone();
        assert_eq!(
            session.submit(&typed(CommandKind::Reflect, "z")),
            Status::Ignored(IgnoreReason::InvalidAxis)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn rotate_takes_degrees() {
        let mut session = session();
        let center = session.shape().centroid();
        let tip = session.shape().vertex(0);
        session.submit(&typed(CommandKind::Rotate, "90"));
        // the top tip turns towards +x
        let rotated_tip = session.shape().vertex(0);
        let radius = center.distance_to(&tip);
        assert!(points_almost_equal(rotated_tip, Point(center.x() + radius, center.y())));
    }

    #[test]
    fn scale_commands_act_per_axis() {
        let mut session = session();
        let before = session.shape().bbox();
        session.submit(&typed(CommandKind::ScaleHorizontal, "2"));
        session.submit(&typed(CommandKind::ScaleVertical, "0.5"));
        let after = session.shape().bbox();
        assert!((after.width() - 2.0 * before.width()).abs() < 1e-9);
        assert!((after.height() - 0.5 * before.height()).abs() < 1e-9);
    }

    #[test]
    fn reflect_triggers() {
        let mut session = session();
        let original = session.shape().clone();
        for kind in [CommandKind::ReflectVertical, CommandKind::ReflectVertical] {
            assert_eq!(session.submit(&TypedCommand::trigger(kind)), Status::Applied);
        }
        assert!(polygons_almost_equal(session.shape(), &original));

        session.submit(&TypedCommand::trigger(CommandKind::ReflectVertical));
        // tip pointing up now points down
        let c = session.shape().centroid();
        assert!(session.shape().vertex(0).y() > c.y());
    }

    #[test]
    fn text_mode_moves_the_anchor() {
        let mut session = session();
        let shape = session.shape().clone();
        assert_eq!(session.apply(Command::ToggleMode), Status::Applied);
        assert_eq!(session.mode(), Mode::Text);

        session.submit(&typed(CommandKind::MoveHorizontal, "15"));
        session.submit(&typed(CommandKind::MoveVertical, "10"));
        assert_eq!(session.anchor(), Point(735.0, 530.0));
        assert_eq!(session.shape(), &shape);
    }

    #[test]
    fn text_anchor_is_not_bounded() {
        let mut session = session().with_mode(Mode::Text);
        assert_eq!(
            session.submit(&typed(CommandKind::MoveHorizontal, "100000")),
            Status::Applied
        );
        assert_eq!(session.anchor(), Point(100720.0, 540.0));
    }

    #[test_case(TypedCommand::new(CommandKind::ScaleHorizontal, "2"); "scale")]
    #[test_case(TypedCommand::new(CommandKind::Rotate, "45"); "rotate")]
    #[test_case(TypedCommand::trigger(CommandKind::ReflectHorizontal); "reflect")]
    fn text_mode_ignores_shape_commands(command: TypedCommand) {
        let mut session = session().with_mode(Mode::Text);
        let before = session.clone();
        assert_eq!(
            session.submit(&command),
            Status::Ignored(IgnoreReason::NotInTextMode)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn toggling_preserves_both_subjects() {
        let mut session = session();
        session.submit(&typed(CommandKind::MoveHorizontal, "40"));
        let shape = session.shape().clone();

        session.apply(Command::SetMode(Mode::Text));
        session.submit(&typed(CommandKind::MoveHorizontal, "-30"));
        let anchor = session.anchor();

        session.submit(&TypedCommand::trigger(CommandKind::ToggleMode));
        assert_eq!(session.mode(), Mode::Shape);
        assert_eq!(session.shape(), &shape);
        assert_eq!(session.anchor(), anchor);
        assert!(matches!(session.subject(), Subject::Shape(s) if s == &shape));
    }

    #[test]
    fn held_keys_step_once_per_tick() {
        let mut session = session();
        let before = session.shape().centroid();
        let input = InputSnapshot::from_keys(&[Key::Right, Key::Up]);

        let report = session.tick(&input, &[]);
        assert_eq!(report.tick, 0);
        assert_eq!(report.key_moves, vec![Status::Applied, Status::Applied]);
        assert!(report.commands.is_empty());

        session.tick(&input, &[]);
        let after = session.shape().centroid();
        assert!(points_almost_equal(after, Point(before.x() + 10.0, before.y() - 10.0)));
        assert_eq!(session.n_ticks(), 2);
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let mut session = session().with_key_step(7).unwrap();
        let before = session.shape().clone();
        let report = session.tick(&InputSnapshot::from_keys(&Key::ALL), &[]);
        assert_eq!(report.key_moves.len(), 4);
        assert!(polygons_almost_equal(session.shape(), &before));
    }

    #[test]
    fn held_keys_then_typed_commands() {
        let mut session = session().with_mode(Mode::Text);
        let input = InputSnapshot::from_keys(&[Key::Left, Key::Down]);
        let typed = [
            typed(CommandKind::MoveHorizontal, "100"),
            typed(CommandKind::Rotate, "x"),
            typed(CommandKind::ToggleMode, ""),
        ];
        let report = session.tick(&input, &typed);
        assert_eq!(session.anchor(), Point(815.0, 545.0));
        assert_eq!(
            report.commands,
            vec![
                Status::Applied,
                Status::Ignored(IgnoreReason::MalformedInput),
                Status::Applied
            ]
        );
        assert_eq!(session.mode(), Mode::Shape);
        assert_eq!(report.statuses().count(), 5);
    }

    #[test]
    fn key_tracker_snapshots() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.snapshot().is_empty());

        tracker.press(Key::Left);
        tracker.press(Key::Up);
        tracker.press(Key::Left);
        let snapshot = tracker.snapshot();
        tracker.release(Key::Left);

        // taken before the release
        assert_eq!(snapshot, InputSnapshot::from_keys(&[Key::Left, Key::Up]));
        assert_eq!(
            tracker.snapshot(),
            InputSnapshot {
                up: true,
                ..Default::default()
            }
        );
        tracker.release_all();
        assert!(tracker.snapshot().is_empty());
    }

    #[test_case("Left", Key::Left; "capitalized")]
    #[test_case("down", Key::Down; "lowercase")]
    #[test_case(" RIGHT ", Key::Right; "padded")]
    fn key_names(name: &str, key: Key) {
        assert_eq!(name.parse::<Key>().unwrap(), key);
    }

    #[test]
    fn unknown_key_name() {
        assert!("space".parse::<Key>().is_err());
    }

    #[test]
    fn session_from_polygon() {
        let triangle =
            Polygon::new(vec![Point(10.0, 10.0), Point(20.0, 10.0), Point(15.0, 20.0)]).unwrap();
        let bounds = Rect::from_borders(0.0, 30.0, 30.0, 0.0).unwrap();
        let mut session = Session::new(triangle.clone(), Point(15.0, 15.0), bounds);

        assert_eq!(session.apply(Command::Move { dx: 10, dy: 0 }), Status::Applied);
        assert_eq!(
            session.apply(Command::Move { dx: 1, dy: 0 }),
            Status::Rejected(RejectReason::OutOfBounds)
        );
        assert_eq!(session.shape().vertex(1), Point(30.0, 10.0));
        assert_eq!(session.apply(Command::rotate(180.0).unwrap()), Status::Applied);
        assert_eq!(session.apply(Command::scale(2.0, 2.0).unwrap()), Status::Applied);
        assert!(Command::scale(f64::NAN, 1.0).is_none());
        assert_eq!(session.shape().n_vertices(), triangle.n_vertices());
    }

    #[test]
    fn overflowing_scale_is_rejected() {
        let mut session = session();
        let before = session.shape().clone();

        let status = session.submit(&typed(CommandKind::ScaleHorizontal, "1e308"));
        assert_eq!(status, Status::Rejected(RejectReason::Overflow));
        assert_eq!(session.shape(), &before);

        let status = session.submit(&typed(CommandKind::ScaleVertical, "-1e308"));
        assert_eq!(status, Status::Rejected(RejectReason::Overflow));
        assert_eq!(session.shape(), &before);
    }

    #[test]
    fn large_finite_scale_keeps_the_other_axis() {
        let mut session = session();
        let before = session.shape().clone();

        let status = session.submit(&typed(CommandKind::ScaleHorizontal, "1e200"));
        assert_eq!(status, Status::Applied);
        for (b, a) in before.vertex_iter().zip(session.shape().vertex_iter()) {
            assert!(a.x().is_finite());
            assert!(points_almost_equal(Point(0.0, a.y()), Point(0.0, b.y())));
        }
    }

    #[test_case(0; "zero")]
    #[test_case(-5; "negative")]
    #[test_case(i64::MIN; "minimum")]
    fn key_step_must_be_positive(step: i64) {
        assert!(session().with_key_step(step).is_err());
    }

    #[test]
    fn extreme_key_steps_do_not_overflow() {
        let input = InputSnapshot::from_keys(&[Key::Left, Key::Down]);
        let moves = input.moves(i64::MIN).collect::<Vec<_>>();
        assert_eq!(
            moves,
            vec![
                Command::Move { dx: i64::MAX, dy: 0 },
                Command::Move { dx: 0, dy: i64::MAX },
            ]
        );
    }

    #[test]
    fn outer_radius_is_truncated() {
        let star = Viewport::new(1000, 800).initial_star();
        assert_eq!(star.inner_radius, 15.0);
        assert_eq!(star.outer_radius, 37.0);
    }
}
