use std::rc::Rc;
use std::time::Duration;

use hookbook_core::*;
use hookbook_platform::*;
use hookbook_ui::*;

fn counter(_: &mut Scheduler) -> View {
    let count = remember(|| signal(0));
    Column(Modifier::new()).child((
        Text(format!("count = {}", count.get())).modifier(Modifier::new().test_tag("count")),
        Row(Modifier::new()).child((
            Button("+1", {
                let count = count.as_ref().clone();
                move || count.update(|n| *n += 1)
            })
            .modifier(Modifier::new().test_tag("inc")),
            Button("reset", {
                let count = count.as_ref().clone();
                move || count.set(0)
            }),
        )),
    ))
}

#[test]
fn click_by_tag_and_label() {
    let mut app = App::with_manual_clock(counter);
    app.pump().unwrap();
    assert_eq!(app.text_of("count").as_deref(), Some("count = 0"));

    app.click("inc").unwrap();
    app.click("+1").unwrap();
    assert_eq!(app.text_of("count").as_deref(), Some("count = 2"));
    assert_eq!(app.focused_tag().as_deref(), Some("inc"));

    app.click("reset").unwrap();
    assert_eq!(app.text_of("count").as_deref(), Some("count = 0"));

    assert!(matches!(app.click("nope"), Err(PlatformError::NoTarget(_))));
}

#[test]
fn painted_page() {
    let mut app = App::with_manual_clock(|_| {
        let name = remember_node_ref();
        Column(Modifier::new()).child((
            Heading("Title"),
            CodeBlock("fn a() {}\nlet x = 1;", "rust"),
            Column(Modifier::new().padding(2.0)).child((
                UncontrolledTextField("name", &name, Modifier::new().test_tag("name")),
                Image("hook.png", "hook", Modifier::new()),
            )),
            Row(Modifier::new()).child((Text("n:"), Button("go", || {}))),
        ))
    });
    app.pump().unwrap();
    insta::assert_snapshot!(app.scene().to_plain_string(), @r"
    Title
     1 | fn a() {}
     2 | let x = 1;
      [name]
      [image: hook]
    n: [ go ]
    ");

    app.input("name", "Ada").unwrap();
    assert_eq!(app.field_value("name").as_deref(), Some("Ada"));
    assert!(app.scene().to_plain_string().contains("  [Ada_]"));
}

#[test]
fn timers_follow_the_manual_clock() {
    let mut app = App::with_manual_clock(|_| {
        let ticks = remember(|| signal(0u32));
        mount_effect({
            let ticks = ticks.as_ref().clone();
            move || interval(Duration::from_secs(1), move || ticks.update(|t| *t += 1))
        });
        Text(format!("{}", ticks.get())).modifier(Modifier::new().test_tag("ticks"))
    });
    app.pump().unwrap();
    app.advance(Duration::from_millis(2500)).unwrap();
    assert_eq!(app.text_of("ticks").as_deref(), Some("2"));

    app.unmount();
    assert_eq!(app.scheduler().active_timers(), 0);
}

#[test]
fn pump_delivers_task_results() {
    let mut app = App::with_manual_clock(|_| {
        let names = remember(|| signal(Vec::<String>::new()));
        mount_effect({
            let names = names.as_ref().clone();
            move || {
                if let Err(e) = spawn_scoped(fetch_json::<Vec<String>>("/names.json"), move |r| {
                    names.set(r.unwrap_or_default())
                }) {
                    log::error!("{e}");
                }
                Dispose::noop()
            }
        });
        Text(names.get().join(", ")).modifier(Modifier::new().test_tag("names"))
    });
    app.set_asset_loader(Rc::new(
        StaticAssets::new().with("names.json", r#"["Ann","Bo"]"#),
    ));
    let frames = app.pump().unwrap();
    assert_eq!(frames, 2);
    assert_eq!(app.text_of("names").as_deref(), Some("Ann, Bo"));
}

#[test]
fn session_runs_commands_until_quit() {
    let mut app = App::with_manual_clock(counter);
    let mut backend = PlainBackend::new();
    let input = "click inc\nbogus\nclick +1\nquit\nclick inc\n".as_bytes();
    run_terminal_session(&mut app, &mut backend, input).unwrap();
    assert!(backend.last().starts_with("count = 2"));
    // first paint, then one per parsed command before quit
    assert_eq!(backend.frames(), 3);
}
