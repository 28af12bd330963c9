//! The static wine quality dataset.
//!
//! All figures are precomputed from the UCI Wine Quality dataset (6,497
//! Portuguese Vinho Verde wines). The [`Dataset`] is built once at start-up,
//! checked with [`Dataset::validate`], and then shared read-only.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::{excellence_rate, format_percent, format_thousands};
use crate::models::{
    AlcoholCategoryStat, AlcoholQualitySample, ColorTag, MAX_QUALITY, MIN_QUALITY, QualityBucket,
    StoryStep, VisualKind, WineCategory, WineSummary, WineTypeSlice,
};

/// Number of steps in the narrated story.
pub const STORY_STEP_COUNT: usize = 4;

const QUALITY_BUCKET_COUNT: usize = 7;
const WINE_TYPE_COUNT: usize = 2;
const SAMPLE_COUNT: usize = 16;
const ALCOHOL_CATEGORY_COUNT: usize = 5;

/// Shape violations detected by [`Dataset::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("{table} must have {expected} entries, got {actual}")]
    WrongLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("quality bucket {index} has quality {quality}, expected {expected}")]
    QualityOutOfOrder {
        index: usize,
        quality: u8,
        expected: u8,
    },

    #[error("quality bucket {quality} has percentage {percentage} outside 0..=100")]
    PercentageOutOfRange {
        quality: u8,
        percentage: rust_decimal::Decimal,
    },

    #[error("sample {index} has quality {quality} outside 3..=9")]
    SampleQualityOutOfRange { index: usize, quality: u8 },

    #[error("story step {step} shows '{actual}', expected '{expected}'")]
    StoryOutOfOrder {
        step: usize,
        expected: VisualKind,
        actual: VisualKind,
    },
}

/// Every table the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub summary: WineSummary,
    pub quality_distribution: Vec<QualityBucket>,
    pub wine_types: Vec<WineTypeSlice>,
    pub alcohol_quality_samples: Vec<AlcoholQualitySample>,
    pub alcohol_categories: Vec<AlcoholCategoryStat>,
    pub story_steps: Vec<StoryStep>,
}

impl Dataset {
    /// Builds the dataset with the published UCI figures.
    ///
    /// ```
    /// use wine_core::Dataset;
    ///
    /// let dataset = Dataset::uci_wine_quality();
    /// assert!(dataset.validate().is_ok());
    /// assert_eq!(dataset.summary.total_wines, 6497);
    /// assert_eq!(dataset.story_steps[0].title, "The Problem");
    /// ```
    pub fn uci_wine_quality() -> Self {
        let summary = WineSummary {
            total_wines: 6497,
            red_wines: 1599,
            white_wines: 4898,
            alcohol_quality_correlation: dec!(0.476),
            excellent_wines: 198,
            high_quality_wines: 1277,
            average_quality: dec!(5.87),
            premium_alcohol_avg_quality: dec!(6.6),
            budget_alcohol_avg_quality: dec!(5.1),
        };

        let quality_distribution = vec![
            QualityBucket::new(3, 30, dec!(0.5)),
            QualityBucket::new(4, 216, dec!(3.3)),
            QualityBucket::new(5, 2138, dec!(32.9)),
            QualityBucket::new(6, 2836, dec!(43.7)),
            QualityBucket::new(7, 1079, dec!(16.6)),
            QualityBucket::new(8, 193, dec!(3.0)),
            QualityBucket::new(9, 5, dec!(0.1)),
        ];

        let wine_types = vec![
            WineTypeSlice {
                category: WineCategory::White,
                label: "White Wine".to_string(),
                count: summary.white_wines,
                color: ColorTag::from_rgb(0xFFD700),
            },
            WineTypeSlice {
                category: WineCategory::Red,
                label: "Red Wine".to_string(),
                count: summary.red_wines,
                color: ColorTag::from_rgb(0x8B0000),
            },
        ];

        use WineCategory::{Red, White};
        let alcohol_quality_samples = vec![
            AlcoholQualitySample::new(dec!(8.4), 4, White),
            AlcoholQualitySample::new(dec!(8.8), 5, White),
            AlcoholQualitySample::new(dec!(9.2), 5, Red),
            AlcoholQualitySample::new(dec!(9.5), 6, White),
            AlcoholQualitySample::new(dec!(9.8), 5, Red),
            AlcoholQualitySample::new(dec!(10.1), 6, White),
            AlcoholQualitySample::new(dec!(10.4), 6, Red),
            AlcoholQualitySample::new(dec!(10.8), 6, White),
            AlcoholQualitySample::new(dec!(11.0), 7, Red),
            AlcoholQualitySample::new(dec!(11.3), 8, Red),
            AlcoholQualitySample::new(dec!(11.6), 7, White),
            AlcoholQualitySample::new(dec!(12.0), 7, Red),
            AlcoholQualitySample::new(dec!(12.3), 8, White),
            AlcoholQualitySample::new(dec!(12.8), 8, Red),
            AlcoholQualitySample::new(dec!(13.2), 8, Red),
            AlcoholQualitySample::new(dec!(14.0), 9, Red),
        ];

        let alcohol_categories = vec![
            category("Low (<9%)", dec!(5.1), 175, 0xef4444),
            category("Budget (9-10%)", dec!(5.4), 1836, 0xf97316),
            category("Standard (10-11%)", dec!(5.8), 2892, 0xeab308),
            category("Premium (11-12%)", dec!(6.4), 1248, 0x84cc16),
            category("Luxury (12%+)", dec!(6.8), 346, 0x22c55e),
        ];

        let story_steps = story_steps(&summary);

        debug!(
            total_wines = summary.total_wines,
            steps = story_steps.len(),
            "built UCI wine quality dataset"
        );

        Self {
            summary,
            quality_distribution,
            wine_types,
            alcohol_quality_samples,
            alcohol_categories,
            story_steps,
        }
    }

    /// Checks the table shapes the renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] found.
    pub fn validate(&self) -> Result<(), DatasetError> {
        expect_len(
            "quality_distribution",
            QUALITY_BUCKET_COUNT,
            self.quality_distribution.len(),
        )?;
        expect_len("wine_types", WINE_TYPE_COUNT, self.wine_types.len())?;
        expect_len(
            "alcohol_quality_samples",
            SAMPLE_COUNT,
            self.alcohol_quality_samples.len(),
        )?;
        expect_len(
            "alcohol_categories",
            ALCOHOL_CATEGORY_COUNT,
            self.alcohol_categories.len(),
        )?;
        expect_len("story_steps", STORY_STEP_COUNT, self.story_steps.len())?;

        for (index, (bucket, expected)) in self
            .quality_distribution
            .iter()
            .zip(MIN_QUALITY..=MAX_QUALITY)
            .enumerate()
        {
            if bucket.quality != expected {
                return Err(DatasetError::QualityOutOfOrder {
                    index,
                    quality: bucket.quality,
                    expected,
                });
            }
            if bucket.percentage.is_sign_negative() || bucket.percentage > dec!(100) {
                return Err(DatasetError::PercentageOutOfRange {
                    quality: bucket.quality,
                    percentage: bucket.percentage,
                });
            }
        }

        if let Some((index, sample)) = self
            .alcohol_quality_samples
            .iter()
            .enumerate()
            .find(|(_, s)| !(MIN_QUALITY..=MAX_QUALITY).contains(&s.quality))
        {
            return Err(DatasetError::SampleQualityOutOfRange {
                index,
                quality: sample.quality,
            });
        }

        for (index, (step, expected)) in self
            .story_steps
            .iter()
            .zip(VisualKind::all())
            .enumerate()
        {
            if step.visual != *expected {
                return Err(DatasetError::StoryOutOfOrder {
                    step: index + 1,
                    expected: *expected,
                    actual: step.visual,
                });
            }
        }

        Ok(())
    }

    /// The samples of one wine category, in dataset order.
    pub fn samples_for(
        &self,
        category: WineCategory,
    ) -> impl Iterator<Item = &AlcoholQualitySample> {
        self.alcohol_quality_samples
            .iter()
            .filter(move |s| s.category == category)
    }

    /// Colour of a wine category, taken from its slice of the type split.
    pub fn category_color(
        &self,
        category: WineCategory,
    ) -> Option<ColorTag> {
        self.wine_types
            .iter()
            .find(|slice| slice.category == category)
            .map(|slice| slice.color)
    }

    /// The story step for a 1-based step number, if it exists.
    pub fn story_step(
        &self,
        step: usize,
    ) -> Option<&StoryStep> {
        step.checked_sub(1).and_then(|i| self.story_steps.get(i))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::uci_wine_quality()
    }
}

fn category(
    label: &str,
    avg_quality: rust_decimal::Decimal,
    count: u32,
    rgb: u32,
) -> AlcoholCategoryStat {
    AlcoholCategoryStat {
        label: label.to_string(),
        avg_quality,
        count,
        color: ColorTag::from_rgb(rgb),
    }
}

fn expect_len(
    table: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DatasetError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DatasetError::WrongLength {
            table,
            expected,
            actual,
        })
    }
}

/// The narrative. Stats lines quote the summary so they cannot drift from it.
fn story_steps(summary: &WineSummary) -> Vec<StoryStep> {
    vec![
        StoryStep {
            title: "The Problem".to_string(),
            subtitle: "What makes great wine?".to_string(),
            content: "Is wine quality just subjective taste, marketing, and tradition? \
                      Or can science actually predict what makes wine great?"
                .to_string(),
            stats_text: format!(
                "We analyzed {} Portuguese wines to find out",
                format_thousands(summary.total_wines)
            ),
            visual: VisualKind::Problem,
        },
        StoryStep {
            title: "The Discovery".to_string(),
            subtitle: "Alcohol content predicts quality!".to_string(),
            content: "After rigorous statistical analysis, we found that alcohol content \
                      is the strongest predictor of wine quality."
                .to_string(),
            stats_text: format!(
                "Correlation: {} (highly significant, p < 0.001)",
                summary.alcohol_quality_correlation
            ),
            visual: VisualKind::Discovery,
        },
        StoryStep {
            title: "The Proof".to_string(),
            subtitle: "The numbers don't lie".to_string(),
            content: "High-alcohol wines consistently outperform low-alcohol wines across \
                      all categories and wine types."
                .to_string(),
            stats_text: format!(
                "Premium alcohol (12%+): {} avg quality vs Budget (<9%): {}",
                summary.premium_alcohol_avg_quality, summary.budget_alcohol_avg_quality
            ),
            visual: VisualKind::Proof,
        },
        StoryStep {
            title: "The Impact".to_string(),
            subtitle: "This changes everything".to_string(),
            content: "For winemakers: optimize fermentation. For consumers: use alcohol % \
                      as quality indicator. Science beats sommelier!"
                .to_string(),
            stats_text: format!(
                "Only {} of wines achieve excellence - huge improvement potential",
                format_percent(excellence_rate(summary))
            ),
            visual: VisualKind::Impact,
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn built_in_dataset_is_valid() {
        assert_eq!(Dataset::uci_wine_quality().validate(), Ok(()));
    }

    #[test]
    fn quality_counts_match_published_distribution() {
        let dataset = Dataset::uci_wine_quality();
        let counts: Vec<u32> = dataset
            .quality_distribution
            .iter()
            .map(|b| b.count)
            .collect();

        assert_eq!(counts, vec![30, 216, 2138, 2836, 1079, 193, 5]);
    }

    #[test]
    fn wine_type_counts_come_from_summary() {
        let dataset = Dataset::uci_wine_quality();

        assert_eq!(dataset.wine_types[0].label, "White Wine");
        assert_eq!(dataset.wine_types[0].count, 4898);
        assert_eq!(dataset.wine_types[1].label, "Red Wine");
        assert_eq!(dataset.wine_types[1].count, 1599);
    }

    #[test]
    fn samples_split_into_red_and_white() {
        let dataset = Dataset::uci_wine_quality();

        assert_eq!(dataset.samples_for(WineCategory::Red).count(), 9);
        assert_eq!(dataset.samples_for(WineCategory::White).count(), 7);
    }

    #[test]
    fn story_stats_text_quotes_summary() {
        let dataset = Dataset::uci_wine_quality();
        let stats: Vec<&str> = dataset
            .story_steps
            .iter()
            .map(|s| s.stats_text.as_str())
            .collect();

        assert_eq!(
            stats,
            vec![
                "We analyzed 6,497 Portuguese wines to find out",
                "Correlation: 0.476 (highly significant, p < 0.001)",
                "Premium alcohol (12%+): 6.6 avg quality vs Budget (<9%): 5.1",
                "Only 3.0% of wines achieve excellence - huge improvement potential",
            ]
        );
    }

    #[test]
    fn category_colors_follow_wine_type_slices() {
        let dataset = Dataset::uci_wine_quality();

        assert_eq!(
            dataset.category_color(WineCategory::Red),
            Some(ColorTag::from_rgb(0x8B0000))
        );
        assert_eq!(
            dataset.category_color(WineCategory::White),
            Some(ColorTag::from_rgb(0xFFD700))
        );
    }

    #[test]
    fn story_step_is_one_based() {
        let dataset = Dataset::uci_wine_quality();

        assert!(dataset.story_step(0).is_none());
        assert_eq!(dataset.story_step(1).map(|s| s.visual), Some(VisualKind::Problem));
        assert_eq!(dataset.story_step(4).map(|s| s.visual), Some(VisualKind::Impact));
        assert!(dataset.story_step(5).is_none());
    }

    #[test]
    fn validate_rejects_missing_story_step() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.story_steps.pop();

        assert_eq!(
            dataset.validate(),
            Err(DatasetError::WrongLength {
                table: "story_steps",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn validate_rejects_unordered_buckets() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.quality_distribution.swap(0, 1);

        assert_eq!(
            dataset.validate(),
            Err(DatasetError::QualityOutOfOrder {
                index: 0,
                quality: 4,
                expected: 3,
            })
        );
    }

    #[test]
    fn validate_rejects_percentage_over_hundred() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.quality_distribution[2].percentage = dec!(100.1);

        assert_eq!(
            dataset.validate(),
            Err(DatasetError::PercentageOutOfRange {
                quality: 5,
                percentage: dec!(100.1),
            })
        );
    }

    #[test]
    fn validate_rejects_sample_quality_out_of_range() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.alcohol_quality_samples[3].quality = 10;

        assert_eq!(
            dataset.validate(),
            Err(DatasetError::SampleQualityOutOfRange {
                index: 3,
                quality: 10,
            })
        );
    }

    #[test]
    fn validate_rejects_reordered_story() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.story_steps.swap(1, 2);

        assert_eq!(
            dataset.validate(),
            Err(DatasetError::StoryOutOfOrder {
                step: 2,
                expected: VisualKind::Discovery,
                actual: VisualKind::Proof,
            })
        );
    }
}
