//! Edge-resizer demo driver
//!
//! Replays a scripted pointer session against a region inside a fixed-size
//! parent and logs every cursor change and committed bound. Useful for
//! checking a margin setting without a windowing system.

use std::path::PathBuf;

use clap::Parser;
use edge_resizer::{
    CursorHint, DragController, Host, Point, PointerEvent, Rect, ResizerConfig, Size,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edge-resizer", about = "Replay a resize/move pointer session")]
struct Cli {
    /// TOML config file with `edge_margin`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parent width in pixels
    #[arg(long, default_value_t = 640)]
    parent_width: i32,

    /// Parent height in pixels
    #[arg(long, default_value_t = 480)]
    parent_height: i32,
}

/// Host that only logs what a UI framework would do
struct LoggingHost {
    parent: Size,
}

impl Host for LoggingHost {
    fn set_cursor(&mut self, hint: CursorHint) {
        tracing::info!(?hint, "cursor");
    }

    fn commit_bounds(&mut self, bounds: Rect) {
        tracing::info!(
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "bounds committed"
        );
    }

    fn request_parent_repaint_and_relayout(&mut self) {
        tracing::debug!("parent repaint requested");
    }

    fn parent_size(&self) -> Option<Size> {
        Some(self.parent)
    }
}

fn script() -> Vec<PointerEvent> {
    vec![
        // Hover across the right edge into the bottom-right corner
        PointerEvent::Moved(Point::new(150, 150)),
        PointerEvent::Moved(Point::new(208, 150)),
        PointerEvent::Moved(Point::new(208, 208)),
        // Grow from the bottom-right corner
        PointerEvent::Pressed(Point::new(208, 208)),
        PointerEvent::Dragged(Point::new(240, 230)),
        PointerEvent::Dragged(Point::new(300, 260)),
        PointerEvent::Released,
        // Drag the interior far past the top-left edge
        PointerEvent::Pressed(Point::new(200, 200)),
        PointerEvent::Dragged(Point::new(100, 120)),
        PointerEvent::Dragged(Point::new(-50, -40)),
        PointerEvent::Released,
        PointerEvent::Exited,
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ResizerConfig::load_or_default(path),
        None => ResizerConfig::default(),
    };
    tracing::info!(edge_margin = config.edge_margin, "starting");

    let host = LoggingHost {
        parent: Size::new(cli.parent_width, cli.parent_height),
    };
    let mut controller = DragController::new(host, Rect::new(100, 100, 110, 110), config);

    let mut steps = 0usize;
    controller.add_resize_listener(move |bounds| {
        steps += 1;
        tracing::debug!(step = steps, ?bounds, "resized");
    });

    for event in script() {
        controller.handle_event(event);
    }

    let final_bounds = controller.bounds();
    tracing::info!(?final_bounds, "session replayed");
}
