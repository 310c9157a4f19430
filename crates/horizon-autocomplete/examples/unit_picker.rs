//! Horizon Autocomplete Unit Picker Example
//!
//! Scripted, headless walk through a unit-of-measure picker:
//! - focusing the input and navigating with the arrow keys
//! - typing to move the active row and committing with Enter
//! - the panel flipping above an input near the bottom of the window
//!
//! Run with: cargo run -p horizon-autocomplete --example unit_picker
//! Set `RUST_LOG=horizon_autocomplete=debug` to see the engine's logs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use horizon_autocomplete::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const UNITS: &[&str] = &[
    "pcs",
    "hours",
    "months",
    "weeks",
    "days",
    "kg",
    "liter",
    "meter",
    "square meter",
    "cubic meter",
    "foot",
    "square foot",
    "cubic foot",
    "inch",
    "square inch",
    "cubic inch",
    "lb",
    "oz",
    "doz",
];

const WINDOW: Rect = Rect::new(0.0, 0.0, 480.0, 640.0);

fn print_view(title: &str, view: &AutocompleteView<'_>) {
    println!("== {title}");
    println!(
        "   expanded={} active={:?} selected={:?}",
        view.input.aria_expanded, view.navigation.active_index, view.navigation.selected_index
    );
    let Some(panel) = &view.panel else {
        println!("   (panel unmounted)");
        return;
    };
    if let Some(position) = panel.position {
        println!(
            "   panel {:?} at ({}, {}) {}x{} opacity={:.2}",
            position.placement,
            position.x,
            position.y,
            position.width,
            position.height,
            panel.transition.opacity
        );
    }
    let Some(list) = &panel.list else {
        println!("   (no options)");
        return;
    };
    for row in &list.rows {
        let label: String = row
            .segments
            .iter()
            .map(|segment| {
                if segment.is_match {
                    format!("[{}]", segment.text)
                } else {
                    segment.text.to_owned()
                }
            })
            .collect();
        let marker = match (row.is_active, row.is_selected) {
            (true, true) => "*>",
            (true, false) => " >",
            (false, true) => "* ",
            (false, false) => "  ",
        };
        println!("   {marker} {label}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options: Vec<SelectOption> = UNITS.iter().copied().map(SelectOption::text).collect();
    let config = AutocompleteConfig::from_toml_str(
        r#"
        aria_labelledby = "unit-label"
        transition_ms = 200
        "#,
    )?;

    let layout = Arc::new(LayoutSignals::new());
    let mut autocomplete = Autocomplete::with_layout_source(config, layout.clone());

    // The host owns the value; keep it in sync with the controller's notifications.
    let value: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = value.clone();
    autocomplete.value_changed.connect(move |change: &ValueChange| {
        println!("-> value changed to {:?} (picked: {})", change.value.to_string(), change.picked);
        *sink.lock() = Some(change.value.clone());
    });
    autocomplete.open_changed.connect(|open: &bool| {
        println!("-> panel {}", if *open { "opened" } else { "closed" });
    });

    let start = Instant::now();
    let later = |ms: u64| start + Duration::from_millis(ms);
    let input = Rect::new(24.0, 40.0, 200.0, 32.0);

    // Focus and browse.
    {
        let current = value.lock().clone();
        let props = AutocompleteProps::new(current.as_ref(), &options);
        autocomplete.handle_focus(props, later(0));
        layout.resized.emit(LayoutSnapshot {
            reference: input,
            viewport: WINDOW,
        });
        autocomplete.handle_key_down(props, Key::ArrowDown, later(10));
        autocomplete.handle_key_down(props, Key::ArrowDown, later(20));
        print_view("browsing", &autocomplete.render(props, later(250)));
    }

    // Type, then pick with Enter.
    {
        let current = value.lock().clone();
        let props = AutocompleteProps::new(current.as_ref(), &options);
        autocomplete.handle_text_change(props, "sq", later(300));
    }
    {
        let current = value.lock().clone();
        let props = AutocompleteProps::new(current.as_ref(), &options);
        print_view("typed \"sq\"", &autocomplete.render(props, later(320)));
        autocomplete.handle_key_down(props, Key::Enter, later(400));
    }

    // The input scrolls near the bottom edge; reopen and watch the panel flip.
    {
        let current = value.lock().clone();
        let props = AutocompleteProps::new(current.as_ref(), &options);
        autocomplete.tick(later(700));
        autocomplete.handle_input_click(props, later(800));
        layout.scrolled.emit(LayoutSnapshot {
            reference: input.offset(0.0, 520.0),
            viewport: WINDOW,
        });
        print_view("near the bottom", &autocomplete.render(props, later(1100)));
        autocomplete.handle_outside_pointer_down(props, later(1200));
    }

    println!(
        "final value: {:?}, layout listeners left: {}",
        value.lock().as_ref().map(ToString::to_string),
        layout.listener_count()
    );
    Ok(())
}
