use dioxus::prelude::*;
use shared_types::ViewportMode;

/// Registers a single resize listener that streams `window.innerWidth` back
/// over the eval channel. A listener left by an earlier mount is replaced.
#[cfg_attr(feature = "server", allow(dead_code))]
const WATCH_WIDTH_JS: &str = r#"
    if (window.__dashboardResizeListener) {
        window.removeEventListener('resize', window.__dashboardResizeListener);
    }
    window.__dashboardResizeListener = () => dioxus.send(window.innerWidth);
    window.addEventListener('resize', window.__dashboardResizeListener);
    dioxus.send(window.innerWidth);
"#;

const UNWATCH_WIDTH_JS: &str = r#"
    if (window.__dashboardResizeListener) {
        window.removeEventListener('resize', window.__dashboardResizeListener);
        delete window.__dashboardResizeListener;
    }
"#;

/// Next mode for a reported width, or `None` when it does not change.
/// The first reported width always yields a mode.
#[cfg_attr(feature = "server", allow(dead_code))]
fn mode_change(current: Option<ViewportMode>, width: u32) -> Option<ViewportMode> {
    let next = ViewportMode::from_width(width);
    (current != Some(next)).then_some(next)
}

/// Hook: the current viewport mode, updated on every window resize.
///
/// `None` until the first width arrives; hosts that cannot report a width
/// (server rendering) stay unmeasured. The listener is removed when the
/// calling component unmounts.
pub fn use_viewport_mode() -> Signal<Option<ViewportMode>> {
    #[allow(unused_mut)]
    let mut mode = use_signal(|| None::<ViewportMode>);

    use_future(move || async move {
        // SSR has no window to measure.
        #[cfg(feature = "server")]
        return;

        #[cfg(not(feature = "server"))]
        {
            let mut widths = document::eval(WATCH_WIDTH_JS);
            loop {
                match widths.recv::<u32>().await {
                    Ok(width) => {
                        let current = *mode.peek();
                        if let Some(next) = mode_change(current, width) {
                            mode.set(Some(next));
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = ?e, "Viewport width channel closed");
                        break;
                    }
                }
            }
        }
    });

    use_drop(|| {
        document::eval(UNWATCH_WIDTH_JS);
    });

    mode
}
