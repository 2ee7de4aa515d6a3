use crate::dom;
use reel_core::{Reveal, RevealPlayback, RevealStyle};
use std::time::Duration;
use web_sys as web;

fn apply(el: &web::HtmlElement, style: RevealStyle) {
    dom::set_style(el, "opacity", &style.opacity_css());
    dom::set_style(el, "transform", &style.transform_css());
}

/// Elements that enter together under one reveal.
pub struct RevealGroup {
    name: &'static str,
    reveal: Reveal,
    elements: Vec<web::HtmlElement>,
    playback: Option<RevealPlayback>,
}

impl RevealGroup {
    pub fn new(name: &'static str, reveal: Reveal, elements: Vec<web::HtmlElement>) -> Self {
        Self {
            name,
            reveal,
            elements,
            playback: None,
        }
    }

    #[inline]
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    /// Put every element in its pre-reveal state.
    pub fn prime(&self) {
        for (i, el) in self.elements.iter().enumerate() {
            apply(el, self.reveal.sample(Duration::ZERO, i));
        }
    }

    /// Show everything without animating.
    pub fn show_all(&self) {
        for el in &self.elements {
            apply(el, RevealStyle::VISIBLE);
        }
    }

    /// Start (or restart) the tween.
    pub fn trigger(&mut self) {
        log::debug!("[reveal] {} ({} elements)", self.name, self.elements.len());
        self.playback = Some(RevealPlayback::new(self.reveal.clone(), self.elements.len()));
    }

    pub fn advance(&mut self, dt: Duration) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        let running = playback.advance(dt);
        for (el, style) in self.elements.iter().zip(playback.styles()) {
            apply(el, style);
        }
        if !running {
            self.playback = None;
        }
    }
}
