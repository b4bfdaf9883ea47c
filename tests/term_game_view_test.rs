use blockfall::core::{ConfigError, Session, SessionConfig, SessionSnapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, GameAction, GameStatus, MAX_COLUMNS, MAX_ROWS};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = SessionSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = SessionSnapshot::default();
    snap.board.set(19, 0, Some(Color::Cyan));

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut session = Session::new(SessionConfig::default(), 9);
    session.start().unwrap();
    let snap = session.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let active = snap.active.unwrap();
    for (row, col) in active.cells {
        if row < 0 {
            continue;
        }
        let x = 1 + col as u16 * 2;
        let y = 1 + row as u16;
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "cell ({}, {})", row, col);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::new(SessionConfig::default(), 1);
    session.start().unwrap();
    let mut snap = session.snapshot();
    snap.score = 1234;
    snap.elapsed_ms = 61_500;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("1:01.5"));
    assert!(text.contains("running"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&SessionSnapshot::default(), Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_status() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let idle = view.render(&SessionSnapshot::default(), vp);
    assert!(screen_text(&idle).contains("PRESS ENTER"));

    let mut session = Session::new(SessionConfig::default(), 1);
    session.start().unwrap();
    let running = view.render(&session.snapshot(), vp);
    let text = screen_text(&running);
    assert!(!text.contains("PAUSED"));
    assert!(!text.contains("PRESS ENTER"));

    session.apply_action(GameAction::Pause);
    let paused = view.render(&session.snapshot(), vp);
    assert!(screen_text(&paused).contains("PAUSED"));

    let mut snap = session.snapshot();
    snap.status = GameStatus::Ended;
    let ended = view.render(&snap, vp);
    assert!(screen_text(&ended).contains("GAME OVER"));
}

#[test]
fn term_view_draws_warning_below_overlay() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut session = Session::new(SessionConfig::default(), 1);
    session.start().unwrap();

    view.render_into(&session.snapshot(), Some("GAME IN PROGRESS"), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    // Frame is 22 rows tall starting at y=1; mid row is 12, warning two below.
    assert!(fb.row_text(14).contains("GAME IN PROGRESS"));
}

#[test]
fn term_view_scales_cells() {
    let snap = SessionSnapshot::default();
    let fb = GameView::new(1, 1).render(&snap, Viewport::new(12, 22));
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
}

#[test]
fn term_view_oversized_grid_is_clipped_to_viewport() {
    let err = SessionConfig::from_lookup(|key| match key {
        "BLOCKFALL_COLUMNS" => Some("40000".to_string()),
        "BLOCKFALL_ROWS" => Some("4".to_string()),
        _ => None,
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::TooLarge { field: "columns", .. }));

    // Sessions built directly skip validation; the view still has to cope.
    let mut session = Session::new(SessionConfig::new(4, 40000), 1);
    session.start().unwrap();
    let snap = session.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    assert_eq!((fb.width(), fb.height()), (80, 24));
    // Frame is 6 rows tall, centered vertically, and starts at the left edge.
    assert_eq!(fb.get(0, 9).unwrap().ch, '┌');
    assert_eq!(fb.get(1, 9).unwrap().ch, '─');
    assert_eq!(fb.get(79, 14).unwrap().ch, '─');
    assert_eq!(fb.get(1, 10).unwrap().ch, '·');
}

#[test]
fn term_view_largest_accepted_grid_renders() {
    let config = SessionConfig::new(MAX_ROWS, MAX_COLUMNS);
    config.validate().unwrap();
    let mut session = Session::new(config, 1);
    session.start().unwrap();

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(80, 24));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}
