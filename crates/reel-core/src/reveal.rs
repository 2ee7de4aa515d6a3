//! Scroll-triggered entrance tweens for the section title and cards.

use crate::constants::{
    CARD_REVEAL_DURATION_SEC, CARD_REVEAL_OFFSET_Y, CARD_REVEAL_SCALE_FROM, CARD_REVEAL_STAGGER_SEC,
    CARD_REVEAL_START, TITLE_REVEAL_DURATION_SEC, TITLE_REVEAL_OFFSET_Y, TITLE_REVEAL_START,
};
use crate::error::TriggerParseError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, `1 - (1 - t)^3`.
    Power2Out,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Animated properties of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl RevealStyle {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    fn lerp(a: Self, b: Self, k: f64) -> Self {
        Self {
            opacity: a.opacity + (b.opacity - a.opacity) * k,
            translate_y: a.translate_y + (b.translate_y - a.translate_y) * k,
            scale: a.scale + (b.scale - a.scale) * k,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translateY({:.2}px) scale({:.4})",
            self.translate_y, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }
}

/// Element edge that has to cross the viewport line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// When a trigger starts, written as `"<edge> <viewport %>"`, e.g.
/// `"top 80%"`: the element's top edge reaches 80% down the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerStart {
    pub edge: Edge,
    /// Viewport line from the top, in percent.
    pub viewport_percent: f64,
}

impl TriggerStart {
    pub fn parse(s: &str) -> Result<Self, TriggerParseError> {
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(pos), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TriggerParseError::Shape(s.to_string()));
        };
        let edge = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            other => return Err(TriggerParseError::Edge(other.to_string())),
        };
        let viewport_percent = pos
            .strip_suffix('%')
            .and_then(|p| p.parse::<f64>().ok())
            .filter(|p| (0.0..=100.0).contains(p))
            .ok_or_else(|| TriggerParseError::Position(pos.to_string()))?;
        Ok(Self {
            edge,
            viewport_percent,
        })
    }

    /// Observer root margin that moves the viewport's bottom edge up to the
    /// trigger line.
    pub fn root_margin(&self) -> String {
        let inset = 100.0 - self.viewport_percent;
        if inset <= 0.0 {
            "0px 0px 0% 0px".to_string()
        } else {
            format!("0px 0px -{}% 0px", inset)
        }
    }

    /// Visible fraction of the element at which the edge has crossed the
    /// line. Exact for elements shorter than the shrunken root.
    pub fn threshold(&self) -> f64 {
        match self.edge {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Play on the first entry, never again.
    Once,
    /// Play on every entry.
    EveryEntry,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: TriggerStart,
    pub mode: TriggerMode,
}

/// One entrance tween, applied to a group of elements with a per-index delay.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub from: RevealStyle,
    pub to: RevealStyle,
    pub duration: Duration,
    pub easing: Easing,
    pub stagger: Duration,
    pub trigger: TriggerSpec,
}

impl Reveal {
    /// Section heading: fade in while rising 50px.
    pub fn title() -> Result<Self, TriggerParseError> {
        Ok(Self {
            from: RevealStyle {
                opacity: 0.0,
                translate_y: TITLE_REVEAL_OFFSET_Y,
                scale: 1.0,
            },
            to: RevealStyle::VISIBLE,
            duration: Duration::from_secs_f64(TITLE_REVEAL_DURATION_SEC),
            easing: Easing::Power2Out,
            stagger: Duration::ZERO,
            trigger: TriggerSpec {
                start: TriggerStart::parse(TITLE_REVEAL_START)?,
                mode: TriggerMode::Once,
            },
        })
    }

    /// Cards: fade, rise and grow slightly, one after another.
    pub fn cards() -> Result<Self, TriggerParseError> {
        Ok(Self {
            from: RevealStyle {
                opacity: 0.0,
                translate_y: CARD_REVEAL_OFFSET_Y,
                scale: CARD_REVEAL_SCALE_FROM,
            },
            to: RevealStyle::VISIBLE,
            duration: Duration::from_secs_f64(CARD_REVEAL_DURATION_SEC),
            easing: Easing::Power2Out,
            stagger: Duration::from_secs_f64(CARD_REVEAL_STAGGER_SEC),
            trigger: TriggerSpec {
                start: TriggerStart::parse(CARD_REVEAL_START)?,
                mode: TriggerMode::Once,
            },
        })
    }

    /// Style of element `index` at `elapsed` since the trigger fired.
    pub fn sample(&self, elapsed: Duration, index: usize) -> RevealStyle {
        let delay = self.stagger.as_secs_f64() * index as f64;
        let local = elapsed.as_secs_f64() - delay;
        if local <= 0.0 {
            return self.from;
        }
        let d = self.duration.as_secs_f64();
        let k = if d <= 0.0 { 1.0 } else { local / d };
        let eased = self.easing.apply(k);
        if eased >= 1.0 {
            return self.to;
        }
        RevealStyle::lerp(self.from, self.to, eased)
    }

    /// Time until the last of `count` elements has finished.
    pub fn total_duration(&self, count: usize) -> Duration {
        self.duration + self.stagger * count.saturating_sub(1) as u32
    }
}

/// A reveal in progress over `count` elements.
#[derive(Clone, Debug)]
pub struct RevealPlayback {
    reveal: Reveal,
    count: usize,
    elapsed: Duration,
}

impl RevealPlayback {
    pub fn new(reveal: Reveal, count: usize) -> Self {
        Self {
            reveal,
            count,
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.reveal.total_duration(self.count)
    }

    /// Step forward. Returns true while elements are still animating.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        !self.is_finished()
    }

    pub fn styles(&self) -> impl Iterator<Item = RevealStyle> + '_ {
        (0..self.count).map(move |i| self.reveal.sample(self.elapsed, i))
    }
}
