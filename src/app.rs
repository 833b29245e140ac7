//! Application state: one owner for every piece of the viewer.
//!
//! [`App`] holds the orientation store, the renderer and its surface, the
//! redraw loop, the current view and the event log. The host forwards three
//! kinds of input to it:
//!
//! | Input | Method |
//! |-------|--------|
//! | Orientation event | [`App::on_orientation`] |
//! | Toggle button | [`App::on_toggle`] |
//! | Display frame | [`App::on_frame`] |
//!
//! Availability is decided once in [`App::start`]. When orientation data is
//! unavailable the listener is never attached, the surface is hidden and a
//! notice explains why.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use heapless::String;

use crate::{
    capability::{Availability, FormFactorProbe},
    display_loop::DisplayLoop,
    event_log::{EventLog, LOG_LINE_LENGTH},
    orientation::OrientationStore,
    renderer::{BarScaling, Renderer},
    sensor::OrientationEvent,
    view::View,
};

/// The orientation viewer.
pub struct App<D> {
    store: OrientationStore,
    renderer: Renderer<D>,
    display_loop: DisplayLoop,
    view: View,
    availability: Availability,
    /// Orientation events reach the store only when attached.
    listening: bool,
    log: EventLog,
}

impl<D> App<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Build the app around `surface` and resolve availability.
    pub fn start<P>(
        surface: D,
        probe: &P,
        sensor_supported: bool,
        bar_scaling: BarScaling,
    ) -> Self
    where
        P: FormFactorProbe + ?Sized,
    {
        let availability = Availability::resolve(probe, sensor_supported);
        let mut renderer = Renderer::new(surface).with_bar_scaling(bar_scaling);
        let mut log = EventLog::new();

        let listening = availability.is_available();
        match availability {
            Availability::Available => log.push("Listening for orientation"),
            Availability::HandheldOnly => {
                renderer.hide();
                log.push("Handheld only: surface hidden");
            }
            Availability::SensorUnsupported => {
                renderer.hide();
                log.push("No orientation sensor: surface hidden");
            }
        }

        Self {
            store: OrientationStore::new(),
            renderer,
            display_loop: DisplayLoop::new(),
            view: View::default(),
            availability,
            listening,
            log,
        }
    }

    /// Sensor event handler. Ignored when the listener was never attached.
    pub fn on_orientation(
        &mut self,
        event: OrientationEvent,
    ) {
        if self.listening {
            self.store.set_values(event.alpha, event.beta, event.gamma);
        }
    }

    /// Toggle button handler: flip the view, start redraws when switching to
    /// the graphical view.
    pub fn on_toggle(&mut self) {
        self.view = self.view.toggle();

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        let _ = write!(line, "View: {}", self.view.name());
        self.log.push(&line);

        if self.view.is_graphical() {
            self.display_loop.activate();
        }
    }

    /// Display frame tick. Runs the pending redraw, if any; returns whether
    /// one ran.
    pub fn on_frame(&mut self) -> bool {
        let visible = self.view.is_graphical();
        let Self {
            store,
            renderer,
            display_loop,
            ..
        } = self;

        let drew = display_loop.run_frame(visible, || {
            renderer.clear_frame();
            renderer.draw_orientation(store.reading());
        });

        if drew && !display_loop.is_scheduled() {
            self.log.push("Display loop stopped");
        }
        drew
    }

    #[inline]
    pub const fn view(&self) -> View { self.view }

    #[inline]
    pub const fn availability(&self) -> Availability { self.availability }

    /// Whether the orientation listener is attached.
    #[inline]
    pub const fn is_listening(&self) -> bool { self.listening }

    #[inline]
    pub const fn store(&self) -> &OrientationStore { &self.store }

    #[inline]
    pub const fn renderer(&self) -> &Renderer<D> { &self.renderer }

    #[inline]
    pub const fn display_loop(&self) -> &DisplayLoop { &self.display_loop }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }
}
