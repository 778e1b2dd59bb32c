//! Arx Control applet command handlers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Weak};
use std::thread::JoinHandle;

use logi_driver::arx::broadcast::error::RecvError;
use logi_driver::arx::{ArxEvent, ArxEventType, ArxSession};
use logi_driver::DriverConfig;
use tracing::{debug, warn};

use super::{startup_delay, wait_for_enter, CommandResult};
use crate::cli::ArxCommands;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="stylesheet" href="style.css">
</head>
<body>
<h1 id="title">logi-driver</h1>
<p id="status">Tap a box</p>
<div class="box" id="left" onclick="">Left</div>
<div class="box" id="right" onclick="">Right</div>
<p class="counter">0</p>
</body>
</html>
"#;

const STYLE_CSS: &str = r#"body { background: #101010; color: #e0e0e0; font-family: sans-serif; }
.box { display: inline-block; width: 40%; padding: 2em 0; margin: 2%;
       text-align: center; background: #00a0e0; border-radius: 8px; }
.counter { font-size: 2em; text-align: center; }
"#;

pub fn run(config: &DriverConfig, command: ArxCommands) -> CommandResult {
    match command {
        ArxCommands::Demo {
            custom_handler,
            watch,
        } => demo(config, custom_handler, watch),
    }
}

fn demo(config: &DriverConfig, custom_handler: bool, watch: bool) -> CommandResult {
    let session = Arc::new(ArxSession::load(config.arx_library.as_deref())?);
    let watcher = watch.then(|| spawn_watcher(&session));

    let applet = &config.applet;
    let initialised = if custom_handler {
        let weak = Arc::downgrade(&session);
        let taps = AtomicU32::new(0);
        session.init_with(&applet.identifier, &applet.friendly_name, move |event| {
            on_event(&weak, &taps, event)
        })
    } else {
        session.init(&applet.identifier, &applet.friendly_name, None)
    };
    if !initialised {
        return Err(last_error("LogiArxInit", &session).into());
    }
    startup_delay(config);

    let uploads = [
        ("index.html", INDEX_HTML, "text/html"),
        ("style.css", STYLE_CSS, "text/css"),
    ];
    for (name, content, mime) in uploads {
        if !session.add_utf8_string_as(content, name, Some(mime)) {
            warn!("{}", last_error(name, &session));
        }
    }
    if !session.set_index("index.html") {
        warn!("{}", last_error("LogiArxSetIndex", &session));
    }

    println!(
        "Applet '{}' is running; open Arx Control on your phone.",
        applet.friendly_name
    );
    wait_for_enter("Press Enter to remove the applet...")?;
    session.shutdown();

    // Last strong reference; closes the watcher's channel
    drop(session);
    if let Some(watcher) = watcher {
        if watcher.join().is_err() {
            warn!("Event watcher thread panicked");
        }
    }
    Ok(())
}

/// Custom handler: echoes taps into the page
fn on_event(session: &Weak<ArxSession>, taps: &AtomicU32, event: &ArxEvent) {
    println!("[arx] {event}");
    let Some(session) = session.upgrade() else {
        return;
    };
    match event.event_type {
        ArxEventType::TapOnTag => {
            let count = taps.fetch_add(1, Ordering::Relaxed) + 1;
            let tag = event.tag().unwrap_or("?");
            session.set_tag_content_by_id("status", &format!("Tapped {tag}"));
            session.set_tags_content_by_class("counter", &count.to_string());
            session.set_tag_property_by_id(tag, "style.background", "#e06000");
        }
        ArxEventType::MobileDeviceArrival => {
            let device = event
                .device_type()
                .map(|d| format!("{d:?}"))
                .unwrap_or_else(|| "unknown device".to_string());
            session.set_tag_content_by_id("title", &format!("Hello, {device}"));
        }
        _ => {}
    }
}

fn spawn_watcher(session: &ArxSession) -> JoinHandle<()> {
    let mut rx = session.subscribe();
    std::thread::spawn(move || loop {
        match rx.blocking_recv() {
            Ok(event) => println!("[watch] {event}"),
            Err(RecvError::Lagged(n)) => debug!("Event watcher lagged by {} events", n),
            Err(RecvError::Closed) => break,
        }
    })
}

fn last_error(what: &str, session: &ArxSession) -> String {
    match session.get_last_error() {
        Some(code) => format!("{what} failed: {code}"),
        None => format!("{what} failed"),
    }
}
