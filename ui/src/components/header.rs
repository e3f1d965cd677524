//! Site navigation header
//!
//! Thin shell over [`masthead::HeaderController`]: browser events go in
//! tagged with the frame clock, and a requestAnimationFrame loop samples
//! the controller's animation state into signals while anything is in
//! flight. The window scroll subscription and the controller itself are
//! released in `on_cleanup`.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use masthead::{HeaderConfig, HeaderController, NavItem, Theme};

/// The controller lives in the reactive arena so that every handler can
/// share it through a `Copy` key.
type Controller = StoredValue<HeaderController, LocalStorage>;

/// Signals the frame loop writes the sampled animation state into.
#[derive(Clone, Copy)]
struct HeaderSignals {
    backdrop: RwSignal<String>,
    logo_opacity: RwSignal<f32>,
    input_scale: RwSignal<f32>,
    icon_offset: RwSignal<f32>,
}

/// Current time on the frame clock, in milliseconds.
fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn sample_into(controller: Controller, signals: HeaderSignals, now: f64) {
    controller.with_value(|c| {
        signals.backdrop.set(c.backdrop_color(now).css());
        signals.logo_opacity.set(c.logo_opacity(now));
        let pose = c.overlay_pose(now);
        signals.input_scale.set(pose.input_scale);
        signals.icon_offset.set(pose.icon_offset);
    });
}

/// Start the sampling loop if it is not already running.
///
/// The loop re-arms itself every frame until the controller reports
/// nothing in flight (or has been detached), then stops. Every handler
/// that kicks off an animation calls this; repeated calls while the
/// loop runs are no-ops.
fn drive_frames(controller: Controller, running: StoredValue<bool>, signals: HeaderSignals) {
    if running.get_value() {
        return;
    }
    running.set_value(true);
    tick(controller, running, signals);
}

fn tick(controller: Controller, running: StoredValue<bool>, signals: HeaderSignals) {
    request_animation_frame(move || {
        let now = now_ms();
        sample_into(controller, signals, now);
        let keep_going = controller.with_value(|c| c.is_attached() && c.is_animating(now));
        if keep_going {
            tick(controller, running, signals);
        } else {
            running.set_value(false);
        }
    });
}

/// Main site header
#[component]
pub fn Header() -> impl IntoView {
    let controller: Controller = StoredValue::new_local(
        HeaderController::new(HeaderConfig::default(), Theme::default(), NavItem::defaults())
            .expect("default header configuration is valid"),
    );
    let running = StoredValue::new(false);

    // Static tokens resolved once; the theme is opaque to this shell.
    let brand = controller.with_value(|c| c.theme().brand.css());
    let items = controller.with_value(|c| c.routes().items().to_vec());
    let indicator_key = controller.with_value(|c| c.routes().indicator().key().to_string());

    // Sampled render state, refreshed by the frame loop.
    let signals = HeaderSignals {
        backdrop: RwSignal::new(controller.with_value(|c| c.backdrop_color(now_ms()).css())),
        logo_opacity: RwSignal::new(1.0),
        input_scale: RwSignal::new(0.0),
        icon_offset: RwSignal::new(0.0),
    };
    let search_open = RwSignal::new(false);
    let keyword = RwSignal::new(String::new());

    // Scroll subscription, released on unmount together with the
    // controller (a listener that outlives the header is a leak).
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        let changed = controller
            .try_update_value(|c| c.on_scroll(offset, now_ms()))
            .flatten();
        if changed.is_some() {
            drive_frames(controller, running, signals);
        }
    });
    let scroll_handle = StoredValue::new_local(Some(scroll_handle));
    on_cleanup(move || {
        scroll_handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
        controller.update_value(|c| c.detach(now_ms()));
    });

    let on_logo_enter = move |_| {
        controller.update_value(|c| c.logo_enter(now_ms()));
        drive_frames(controller, running, signals);
    };

    let on_logo_leave = move |_| {
        controller.update_value(|c| c.logo_leave());
        // Snap opacity back to 1 immediately, no fade-out.
        sample_into(controller, signals, now_ms());
    };

    let on_toggle = move |_| {
        let pose = controller
            .try_update_value(|c| c.toggle_search(now_ms()))
            .expect("header controller is alive while mounted");
        search_open.set(pose.open);
        drive_frames(controller, running, signals);
    };

    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = controller.with_value(|c| c.submit_search(&keyword.get_untracked()));
        match submitted {
            Ok(command) => {
                keyword.set(String::new());
                navigate(command.path(), Default::default());
            }
            Err(err) => tracing::debug!("search submit rejected: {err}"),
        }
    };

    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="nav" style:background-color=move || signals.backdrop.get()>
            <div class="col">
                <svg
                    class="logo"
                    viewBox="0 0 160 32"
                    on:mouseenter=on_logo_enter
                    on:mouseleave=on_logo_leave
                    style:opacity=move || signals.logo_opacity.get().to_string()
                >
                    <text x="0" y="24" fill=brand.clone() font-size="24" font-weight="bold">
                        "MASTHEAD"
                    </text>
                </svg>
                <ul class="items">
                    {items
                        .into_iter()
                        .map(|item| {
                            let item_path = item.path.clone();
                            let is_active = Signal::derive(move || {
                                masthead::is_active(&item_path, &pathname.get())
                            });
                            let href = format!("/{}", item.path);
                            let brand = brand.clone();
                            let indicator_key = indicator_key.clone();
                            view! {
                                <li class="item">
                                    <a href=href>{item.label.clone()}</a>
                                    // One shared indicator element migrates between
                                    // items; its identity key keeps repositioning an
                                    // animated move instead of a remount.
                                    <Show when=move || is_active.get()>
                                        <span
                                            class="circle"
                                            data-indicator=indicator_key.clone()
                                            style:background-color=brand.clone()
                                        ></span>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="col">
                <form class="search" on:submit=on_submit>
                    <svg
                        class="search-icon"
                        viewBox="0 0 20 20"
                        fill="currentColor"
                        on:click=on_toggle
                        style:transform=move || format!("translateX({}px)", signals.icon_offset.get())
                    >
                        <path
                            fill-rule="evenodd"
                            clip-rule="evenodd"
                            d="M8 4a4 4 0 100 8 4 4 0 000-8zM2 8a6 6 0 1110.89 3.476l4.817 4.817a1 1 0 01-1.414 1.414l-4.816-4.816A6 6 0 012 8z"
                        ></path>
                    </svg>
                    <input
                        class="search-input"
                        placeholder="Search for Programs"
                        prop:value=move || keyword.get()
                        on:input=move |ev| keyword.set(event_target_value(&ev))
                        tabindex=move || if search_open.get() { "0" } else { "-1" }
                        style:transform=move || format!("scaleX({})", signals.input_scale.get())
                    />
                </form>
            </div>
        </nav>
    }
}
