// Pattern: Facade.
// Four subsystems with their own start-up order sit behind two calls.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "facade",
    topic: Topic::Structural,
    summary: "Home theater subsystems behind watch_movie/end_movie",
    run,
};

mod subsystems {
    #[derive(Default)]
    pub struct Amplifier {
        pub on: bool,
        pub volume: u8,
    }

    impl Amplifier {
        pub fn power(&mut self, on: bool) -> String {
            self.on = on;
            format!("amplifier {}", if on { "on" } else { "off" })
        }

        pub fn set_volume(&mut self, volume: u8) -> String {
            self.volume = volume;
            format!("amplifier volume {}", volume)
        }
    }

    #[derive(Default)]
    pub struct Projector {
        pub on: bool,
        pub widescreen: bool,
    }

    impl Projector {
        pub fn power(&mut self, on: bool) -> String {
            self.on = on;
            format!("projector {}", if on { "on" } else { "off" })
        }

        pub fn widescreen_mode(&mut self) -> String {
            self.widescreen = true;
            "projector in 16:9 mode".to_string()
        }
    }

    #[derive(Default)]
    pub struct Lights {
        pub level: u8,
    }

    impl Lights {
        pub fn dim(&mut self, level: u8) -> String {
            self.level = level;
            format!("lights at {}%", level)
        }
    }

    #[derive(Default)]
    pub struct StreamingPlayer {
        pub playing: Option<String>,
    }

    impl StreamingPlayer {
        pub fn play(&mut self, title: &str) -> String {
            self.playing = Some(title.to_string());
            format!("streaming \"{}\"", title)
        }

        pub fn stop(&mut self) -> String {
            match self.playing.take() {
                Some(title) => format!("stopped \"{}\"", title),
                None => "nothing playing".to_string(),
            }
        }
    }
}

use subsystems::{Amplifier, Lights, Projector, StreamingPlayer};

#[derive(Default)]
pub struct HomeTheater {
    amplifier: Amplifier,
    projector: Projector,
    lights: Lights,
    player: StreamingPlayer,
}

impl HomeTheater {
    pub fn new() -> Self {
        Self {
            lights: Lights { level: 100 },
            ..Self::default()
        }
    }

    /// Returns what each subsystem did, in order.
    pub fn watch_movie(&mut self, title: &str) -> Vec<String> {
        vec![
            self.lights.dim(10),
            self.projector.power(true),
            self.projector.widescreen_mode(),
            self.amplifier.power(true),
            self.amplifier.set_volume(35),
            self.player.play(title),
        ]
    }

    pub fn end_movie(&mut self) -> Vec<String> {
        vec![
            self.player.stop(),
            self.amplifier.power(false),
            self.projector.power(false),
            self.lights.dim(100),
        ]
    }

    pub fn is_showing(&self) -> bool {
        self.player.playing.is_some() && self.projector.on && self.amplifier.on
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Facade");

    let mut theater = HomeTheater::new();
    session.step("watch_movie(\"Metropolis\")");
    for action in theater.watch_movie("Metropolis") {
        session.result(action);
    }
    session.step("end_movie()");
    for action in theater.end_movie() {
        session.result(action);
    }
    Ok(())
}
