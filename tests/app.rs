use gravitas::config::SimulationConfig;
use gravitas::prefabs::{ArenaPrefab, BouncingBallsPrefab, Prefab};
use gravitas::rendering::{DrawCall, RecordingCanvas};
use gravitas::{AppRuntime, AppState, World};
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counting {
    inits: usize,
    updates: usize,
    destroys: usize,
    fail_init: bool,
    stop_after: Option<usize>,
    ghost_participant: bool,
}

impl AppState for Counting {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.inits += 1;
        if self.fail_init {
            return Err("init failed".into());
        }

        ArenaPrefab::default().spawn(world)?;
        BouncingBallsPrefab::default().spawn(world)?;
        if self.ghost_participant {
            world.gravity.add_participant("ghost");
        }
        Ok(())
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.updates += 1;
        if self.stop_after == Some(self.updates) {
            world.shutdown();
        }
        Ok(())
    }

    fn destroy(&mut self, _world: &mut World) -> Result<(), Box<dyn Error>> {
        self.destroys += 1;
        Ok(())
    }
}

/// The runtime takes the state by value, the counters are read back through a
/// shared cell.
struct Shared(Rc<RefCell<Counting>>);

impl AppState for Shared {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.borrow_mut().init(world)
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.borrow_mut().update(world)
    }

    fn destroy(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.borrow_mut().destroy(world)
    }
}

fn run(
    state: Counting,
    frames: u64,
    canvas: &mut RecordingCanvas,
) -> (Counting, Result<(), Box<dyn Error>>) {
    let cell = Rc::new(RefCell::new(state));
    let result = Shared(cell.clone())
        .configure(1920, 1080)
        .with_frame_limit(frames)
        .with_realtime(false)
        .run_with_canvas(canvas);

    let state = Rc::try_unwrap(cell).ok().unwrap().into_inner();
    (state, result)
}

#[test]
fn frame_limit_bounds_the_run() {
    let mut canvas = RecordingCanvas::default();

    let (state, result) = run(Counting::default(), 5, &mut canvas);

    result.unwrap();
    assert_eq!(state.inits, 1);
    assert_eq!(state.updates, 5);
    assert_eq!(state.destroys, 1);
    assert_eq!(canvas.frames(), 5);
}

#[test]
fn every_frame_draws_the_whole_scene() {
    let mut canvas = RecordingCanvas::default();

    let (_, result) = run(Counting::default(), 2, &mut canvas);

    result.unwrap();
    let last = canvas.last_frame();
    assert_eq!(last.len(), 6);
    assert_eq!(last.iter().filter(|c| matches!(c, DrawCall::Polygon { .. })).count(), 4);
    assert_eq!(last.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count(), 2);
}

#[test]
fn failing_init_skips_the_frame_loop() {
    let mut canvas = RecordingCanvas::default();
    let state = Counting {
        fail_init: true,
        ..Counting::default()
    };

    let (state, result) = run(state, 5, &mut canvas);

    assert_eq!(result.unwrap_err().to_string(), "init failed");
    assert_eq!(state.updates, 0);
    assert_eq!(state.destroys, 0);
    assert!(canvas.calls.is_empty());
}

#[test]
fn shutdown_request_ends_the_loop() {
    let mut canvas = RecordingCanvas::default();
    let state = Counting {
        stop_after: Some(3),
        ..Counting::default()
    };

    let (state, result) = run(state, 100, &mut canvas);

    result.unwrap();
    assert_eq!(state.updates, 3);
    assert_eq!(canvas.frames(), 3);
    assert_eq!(state.destroys, 1);
}

#[test]
fn frame_errors_stop_the_run_but_still_tear_down() {
    let mut canvas = RecordingCanvas::default();
    let state = Counting {
        ghost_participant: true,
        ..Counting::default()
    };

    let (state, result) = run(state, 5, &mut canvas);

    assert!(result.unwrap_err().to_string().contains("ghost"));
    assert_eq!(state.updates, 1);
    assert_eq!(state.destroys, 1);
    assert_eq!(canvas.frames(), 0);
}

#[test]
fn invalid_settings_are_rejected_before_init() {
    let cell = Rc::new(RefCell::new(Counting::default()));

    let result = Shared(cell.clone())
        .configure(0, 1080)
        .with_frame_limit(1)
        .with_realtime(false)
        .run_with_canvas(&mut RecordingCanvas::default());
    assert!(result.is_err());

    let result = Shared(cell.clone())
        .configure(1920, 1080)
        .with_config(SimulationConfig {
            timestep: 0.0,
            ..SimulationConfig::default()
        })
        .run_with_canvas(&mut RecordingCanvas::default());
    assert!(result.is_err());

    assert_eq!(cell.borrow().inits, 0);
}
