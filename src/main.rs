//! Replays a scripted input session through a [`Navigator`] and logs every
//! dispatched event.
//!
//! ```text
//! globenav-replay session.json [preset.toml]
//! ```
//!
//! The script is JSON:
//!
//! ```json
//! {
//!   "width": 800,
//!   "height": 600,
//!   "objects": [1, 2],
//!   "frames": [
//!     { "at_ms": 0, "hover": 1,
//!       "input": [{ "type": "cursor_moved", "x": 10.0, "y": 20.0 }] },
//!     { "at_ms": 120 }
//!   ]
//! }
//! ```
//!
//! Each frame sets the clock to `at_ms`, feeds its raw input, then runs one
//! dispatch pass with the pointer over object `hover` (or over nothing).

use std::collections::HashMap;
use std::path::Path;

use globenav::events::{Channel, EventBus, EventPayload};
use globenav::input::InputEvent;
use globenav::picking::{ColorKey, ObjectId};
use globenav::time::{Clock, ManualClock};
use globenav::{Navigator, Options};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Script {
    width: u32,
    height: u32,
    objects: Vec<u64>,
    frames: Vec<Frame>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            objects: Vec::new(),
            frames: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Frame {
    at_ms: u64,
    #[serde(default)]
    hover: Option<u64>,
    #[serde(default)]
    input: Vec<InputEvent>,
}

fn describe(payload: &EventPayload) -> String {
    match payload {
        EventPayload::Mouse(m) => format!(
            "mouse at ({:.0}, {:.0}) picked {:?}",
            m.pos.x, m.pos.y, m.picked
        ),
        EventPayload::Touch(t) => format!(
            "touch at ({:.0}, {:.0}) picked {:?}",
            t.pos.x, t.pos.y, t.picked
        ),
        EventPayload::Key(key) => format!("key {key}"),
    }
}

fn load_script(path: &Path) -> Result<Script, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("invalid script {}: {e}", path.display()))
}

fn replay(script: Script, options: Options) {
    let clock = ManualClock::new();
    let mut navigator = Navigator::builder()
        .with_options(options)
        .with_size(script.width, script.height)
        .with_clock(clock.clone())
        .build();

    for channel in Channel::ALL {
        let clock = clock.clone();
        let _ = navigator.on(channel, move |event| {
            log::info!(
                "{:>6} ms  global  {:<12} {}",
                clock.now().as_millis(),
                event.channel,
                describe(&event.payload)
            );
        });
    }

    let mut keys: HashMap<u64, ColorKey> = HashMap::new();
    for id in script.objects {
        let bus = EventBus::shared();
        for channel in Channel::ALL {
            let _ = bus.subscribe(channel, move |event| {
                log::info!("          #{id:<6} {}", event.channel);
            });
        }
        let picking = navigator.picking_mut();
        if let Some(key) = picking.assign(ObjectId(id), bus) {
            let _ = keys.insert(id, key);
        }
    }

    for frame in script.frames {
        clock.set_millis(frame.at_ms);
        for input in frame.input {
            navigator.handle_input(input);
        }
        let sample = frame
            .hover
            .and_then(|id| keys.get(&id).copied())
            .unwrap_or(ColorKey::NONE);
        navigator.frame(sample);
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let Some(script_path) = std::env::args().nth(1) else {
        log::error!("Usage: globenav-replay <script.json> [preset.toml]");
        std::process::exit(1);
    };

    let options = match std::env::args().nth(2) {
        Some(preset) => match Options::load(Path::new(&preset)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    match load_script(Path::new(&script_path)) {
        Ok(script) => replay(script, options),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
