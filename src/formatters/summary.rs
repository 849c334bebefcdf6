// ABOUTME: Training summary snapshot and its fixed-template text message
// ABOUTME: Rounds every metric to three decimals before rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Locale;
use crate::models::WorkoutType;

/// Decimal places kept in rendered metrics
pub const SUMMARY_PRECISION: i32 = 3;

/// Round to `SUMMARY_PRECISION` decimals, ties away from zero
#[must_use]
pub fn round_metric(value: f64) -> f64 {
    let scale = 10_f64.powi(SUMMARY_PRECISION);
    (value * scale).round() / scale
}

/// Render the one-line report for a label and four metrics
///
/// Values are rounded with [`round_metric`] and printed with a literal
/// decimal point regardless of locale.
#[must_use]
pub fn format_message(
    label: &str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories: f64,
    locale: Locale,
) -> String {
    let duration = round_metric(duration_hours);
    let distance = round_metric(distance_km);
    let speed = round_metric(mean_speed_kmh);
    let calories = round_metric(calories);
    match locale {
        Locale::En => format!(
            "Training type: {label}; Duration: {duration:.3} h.; Distance: {distance:.3} km; \
             Avg. speed: {speed:.3} km/h; Calories burned: {calories:.3}."
        ),
        Locale::Ru => format!(
            "Тип тренировки: {label}; Длительность: {duration:.3} ч.; Дистанция: {distance:.3} км; \
             Ср. скорость: {speed:.3} км/ч; Потрачено ккал: {calories:.3}."
        ),
    }
}

/// Metrics of one completed workout, computed on demand from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    /// Discipline
    pub workout_type: WorkoutType,
    /// Session length in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}

impl TrainingSummary {
    /// Assemble a summary from already computed metrics
    #[must_use]
    pub const fn new(
        workout_type: WorkoutType,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            workout_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Localized training type label
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        self.workout_type.label(locale)
    }

    /// One-line text report
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        format_message(
            self.label(locale),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
            locale,
        )
    }

    /// Rounded, serializable view of this summary
    #[must_use]
    pub fn to_record(&self, locale: Locale) -> SummaryRecord {
        SummaryRecord {
            workout_type: self.workout_type.code().to_owned(),
            training_type: self.label(locale).to_owned(),
            duration_hours: round_metric(self.duration_hours),
            distance_km: round_metric(self.distance_km),
            mean_speed_kmh: round_metric(self.mean_speed_kmh),
            calories: round_metric(self.calories),
        }
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}

/// JSON shape of a summary line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Sensor tag code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Localized training type label
    pub training_type: String,
    /// Session length in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}
