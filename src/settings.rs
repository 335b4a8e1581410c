//! Spring Settings
//!
//! Tunable parameters for the springs a system drives, loadable from JSON.
//!
//! The step functions in [`crate::spring`] take their parameters explicitly;
//! [`SpringSettings`] is a convenience for callers that keep those parameters
//! in a config file and want one place to validate them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use myth_spring::settings::SpringSettings;
//!
//! // Defaults: 0.1s halflife, critically damped
//! let settings = SpringSettings::default();
//!
//! // Bouncier spring for UI feedback
//! let settings = SpringSettings::default()
//!     .with_halflife(0.25)
//!     .with_damping_ratio(0.5);
//!
//! // From a config file
//! let settings = SpringSettings::from_json(r#"{ "halflife": 0.2 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SpringError};
use crate::inertialization::{InertializationOffset, RootState};
use crate::spring::{
    DEFAULT_APPREHENSION, SpringState, SpringValue, Tangent, TimedState,
    damping_ratio_to_stiffness, halflife_to_damping, simple_spring_damper_exact,
    spring_damper_exact, stiffness_to_frequency, timed_spring_damper_exact,
};

/// Spring parameters shared by a group of tracked values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSettings {
    /// Seconds for the distance to the goal to halve.
    pub halflife: f32,
    /// 1.0 is critically damped, below oscillates, above is sluggish.
    pub damping_ratio: f32,
    /// Lookahead of timed springs, in halflives.
    pub apprehension: f32,
    /// Halflife used to fade out inertialization offsets.
    pub inertialization_halflife: f32,
}

impl Default for SpringSettings {
    #[inline]
    fn default() -> Self {
        Self {
            halflife: 0.1,
            damping_ratio: 1.0,
            apprehension: DEFAULT_APPREHENSION,
            inertialization_halflife: 0.1,
        }
    }
}

impl SpringSettings {
    #[must_use]
    pub fn with_halflife(mut self, halflife: f32) -> Self {
        self.halflife = halflife;
        self
    }

    #[must_use]
    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    #[must_use]
    pub fn with_apprehension(mut self, apprehension: f32) -> Self {
        self.apprehension = apprehension;
        self
    }

    #[must_use]
    pub fn with_inertialization_halflife(mut self, halflife: f32) -> Self {
        self.inertialization_halflife = halflife;
        self
    }

    /// Parses settings from JSON; missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects negative or non-finite parameters.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("halflife", self.halflife),
            ("damping_ratio", self.damping_ratio),
            ("apprehension", self.apprehension),
            ("inertialization_halflife", self.inertialization_halflife),
        ];

        for (name, value) in checks {
            let reason = if !value.is_finite() {
                "must be finite"
            } else if value < 0.0 {
                "must not be negative"
            } else {
                continue;
            };

            log::warn!("Rejecting spring settings: {name} = {value} {reason}");
            return Err(SpringError::InvalidParameter {
                name,
                value,
                reason,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Derived Parameters
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f32 {
        halflife_to_damping(self.halflife)
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f32 {
        damping_ratio_to_stiffness(self.damping_ratio, self.damping())
    }

    /// Natural frequency in Hz.
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> f32 {
        stiffness_to_frequency(self.stiffness())
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Advances a spring toward a fixed goal with these settings.
    ///
    /// Critically damped settings take the cheaper simple-spring path.
    #[must_use]
    pub fn advance<X: SpringValue>(
        &self,
        state: SpringState<X, X::Tangent>,
        x_goal: X,
        dt: f32,
    ) -> SpringState<X, X::Tangent> {
        if (self.damping_ratio - 1.0).abs() < f32::EPSILON {
            simple_spring_damper_exact(state, x_goal, self.halflife, dt)
        } else {
            spring_damper_exact(
                state,
                x_goal,
                <X::Tangent as Tangent>::ZERO,
                self.damping_ratio,
                self.halflife,
                dt,
            )
        }
    }

    /// Advances a timed spring with these settings.
    #[must_use]
    pub fn advance_timed<T>(&self, state: TimedState<T>, x_goal: T, t_goal: f32, dt: f32) -> TimedState<T>
    where
        T: Tangent + SpringValue<Tangent = T>,
    {
        timed_spring_damper_exact(state, x_goal, t_goal, self.halflife, dt, self.apprehension)
    }

    /// Advances an inertialized root with the configured offset halflife.
    #[must_use]
    pub fn advance_inertialization(
        &self,
        offset: &InertializationOffset,
        input: &RootState,
        dt: f32,
    ) -> (InertializationOffset, RootState) {
        offset.update(input, self.inertialization_halflife, dt)
    }
}
