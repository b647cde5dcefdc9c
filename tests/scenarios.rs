use boxflow::render::compose_rows;
use boxflow::{
    AnsiRenderer, AppEvent, AppState, BoxStyle, CounterBox, FlowConfig, FlowLayout, FlowRuntime,
    Point, Size, hit_test,
};

fn app_with_boxes(width: u16, count: usize) -> AppState {
    let mut app = AppState::new(BoxStyle::plain(), FlowConfig::default());
    app.resize(Size::new(width, 60));
    for _ in 1..count {
        app.create_box();
    }
    app
}

fn counters(app: &AppState) -> Vec<u32> {
    app.boxes().iter().map(|b| b.counter()).collect()
}

fn click(app: &mut AppState, point: Point) {
    app.handle(AppEvent::PointerDown {
        x: point.x,
        y: point.y,
    });
    app.handle(AppEvent::PointerUp {
        x: point.x,
        y: point.y,
    });
}

#[test]
fn five_boxes_in_80_columns_wrap_after_three() {
    let app = app_with_boxes(80, 5);
    let rows: Vec<_> = app.boxes().iter().map(|b| b.row()).collect();
    assert_eq!(rows, vec![0, 0, 0, 1, 1]);
    for b in app.boxes() {
        let rect = b.rect();
        assert!(rect.right() <= 80);
    }
}

#[test]
fn click_inside_second_box_increments_only_it() {
    let mut app = app_with_boxes(80, 3);
    let second = app.boxes()[1].rect();
    let inside = Point::new(second.x + 1, second.y + 1);
    assert_eq!(hit_test(inside, app.boxes()), Some(1));

    click(&mut app, inside);

    assert_eq!(counters(&app), vec![0, 1, 0]);
    assert_eq!(app.boxes()[1].content(), "Count: 1");
    assert!(app.view_text().contains("Count: 1"));
}

#[test]
fn zero_width_resize_before_any_box_does_not_panic() {
    let mut layout_only: Vec<CounterBox> = Vec::new();
    FlowLayout::default().repack(&mut layout_only, 0);
    assert!(compose_rows(&layout_only).is_empty());

    let mut app = AppState::new(BoxStyle::plain(), FlowConfig::default());
    assert!(app.view().is_empty());
    app.handle(AppEvent::Resize {
        width: 0,
        height: 0,
    });
    app.handle(AppEvent::CreateRequest);
    assert!(app.is_ready());
    assert!(app.boxes().iter().all(|b| b.rect().x == 2));
}

#[test]
fn release_point_decides_which_box_counts() {
    let mut app = app_with_boxes(80, 27);
    let press = Point::new(5, 5);
    let release = Point::new(50, 50);
    let a = hit_test(press, app.boxes()).unwrap();
    let b = hit_test(release, app.boxes()).unwrap();
    assert_eq!((a, b), (0, 26));

    app.handle(AppEvent::PointerDown {
        x: press.x,
        y: press.y,
    });
    app.handle(AppEvent::PointerMove { x: 30, y: 30 });
    app.handle(AppEvent::PointerUp {
        x: release.x,
        y: release.y,
    });

    assert_eq!(app.boxes()[a].counter(), 0);
    assert_eq!(app.boxes()[b].counter(), 1);
}

#[test]
fn each_click_bumps_exactly_one_counter() {
    let mut app = app_with_boxes(80, 6);
    let targets = [0usize, 4, 4, 2, 5, 0, 4];
    let mut expected = vec![0u32; 6];

    for &idx in &targets {
        let rect = app.boxes()[idx].rect();
        click(&mut app, Point::new(rect.x + rect.width - 1, rect.y + rect.height - 1));
        expected[idx] += 1;
        assert_eq!(counters(&app), expected);
    }
}

#[test]
fn scripted_session_renders_the_clicked_label() {
    let app = AppState::new(BoxStyle::plain(), FlowConfig::default());
    let mut runtime = FlowRuntime::new(app, AnsiRenderer::with_default());
    let mut out = Vec::new();
    runtime
        .run_scripted(
            &mut out,
            [
                AppEvent::Resize {
                    width: 80,
                    height: 24,
                },
                AppEvent::CreateRequest,
                AppEvent::PointerDown { x: 25, y: 2 },
                AppEvent::PointerUp { x: 25, y: 2 },
                AppEvent::Quit,
            ],
        )
        .unwrap();

    let screen = String::from_utf8(out).unwrap();
    assert!(screen.contains("Count: 1"));
    assert_eq!(
        runtime
            .app()
            .boxes()
            .iter()
            .map(|b| b.counter())
            .collect::<Vec<_>>(),
        vec![0, 1]
    );
}
