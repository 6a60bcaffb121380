//! Core projection engine for monthly revenue projections

use super::rows::{MonthlyProjection, ProjectionTable};
use crate::error::{require_finite, require_fraction, ModelError};
use serde::{Deserialize, Serialize};

/// Smart tier monthly rate (INR)
const SMART_MONTHLY_RATE: f64 = 99.0;
/// Pro tier monthly rate (INR)
const PRO_MONTHLY_RATE: f64 = 199.0;
/// Group tier monthly rate (INR)
const GROUP_MONTHLY_RATE: f64 = 299.0;
/// Ad revenue per user per month (INR)
const AD_REVENUE_PER_USER: f64 = 5.0;
/// Affiliate income per user per month (INR)
const AFFILIATE_INCOME_PER_USER: f64 = 10.0;
/// Fraction of users taking consulting services, billed at the group rate
const CONSULTING_UPTAKE: f64 = 0.005;

/// Per-period tier conversion fractions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRates {
    /// Fraction of users converting from free to smart tier
    pub free_to_smart: f64,
    /// Fraction of users converting from free to pro tier
    pub free_to_pro: f64,
    /// Fraction of smart users upgrading to pro within the period
    pub smart_to_pro: f64,
    /// Fraction of users adopting group plans
    pub group_adoption: f64,
}

impl Default for ConversionRates {
    fn default() -> Self {
        Self {
            free_to_smart: 0.05,
            free_to_pro: 0.02,
            smart_to_pro: 0.1,
            group_adoption: 0.01,
        }
    }
}

impl ConversionRates {
    /// Each rate must be a finite fraction in [0, 1]
    pub fn validate(&self) -> Result<(), ModelError> {
        require_fraction("free_to_smart", self.free_to_smart)?;
        require_fraction("free_to_pro", self.free_to_pro)?;
        require_fraction("smart_to_pro", self.smart_to_pro)?;
        require_fraction("group_adoption", self.group_adoption)?;
        Ok(())
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub months: u32,

    /// User base at the start of month 1
    pub starting_users: f64,

    /// Compounding monthly user growth rate
    pub growth_rate: f64,

    /// Tier conversion fractions
    pub conversion_rates: ConversionRates,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            months: 12,
            starting_users: 1000.0,
            growth_rate: 0.05,
            conversion_rates: ConversionRates::default(),
        }
    }
}

impl ProjectionConfig {
    fn validate(&self) -> Result<(), ModelError> {
        require_finite("starting_users", self.starting_users)?;
        if self.starting_users < 0.0 {
            return Err(ModelError::Validation(format!(
                "starting_users must be non-negative, got {}",
                self.starting_users
            )));
        }
        // Negative growth is a supported scenario (shrinking user base)
        require_finite("growth_rate", self.growth_rate)?;
        self.conversion_rates.validate()
    }
}

/// Main projection engine
///
/// Deterministic: the same config always produces the same table. Each run
/// constructs a fresh table; nothing is cached between runs.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection, producing one row per month
    ///
    /// Month 1 uses `starting_users` unmodified; growth compounds once per
    /// period after the row is emitted.
    pub fn project(&self) -> Result<ProjectionTable, ModelError> {
        self.config.validate()?;

        let mut table = ProjectionTable::new();
        let mut users = self.config.starting_users;

        for month in 1..=self.config.months {
            let row = Self::project_month(month, users, &self.config.conversion_rates);
            users = row.total_users * (1.0 + self.config.growth_rate);
            table.add_row(row);
        }

        Ok(table)
    }

    /// Compute one month's metrics from the pre-growth user count
    ///
    /// Pure function of its inputs, so any period can be verified in
    /// isolation without replaying the preceding months.
    fn project_month(month: u32, users: f64, rates: &ConversionRates) -> MonthlyProjection {
        // Tier populations, recomputed fresh each period
        let smart_base = users * rates.free_to_smart;
        let pro_base = users * rates.free_to_pro;
        let group_users = users * rates.group_adoption;

        // One-way upgrade transfer out of the freshly computed smart tier
        let upgrades = smart_base * rates.smart_to_pro;
        let smart_users = smart_base - upgrades;
        let pro_users = pro_base + upgrades;

        let subscription_revenue = smart_users * SMART_MONTHLY_RATE
            + pro_users * PRO_MONTHLY_RATE
            + group_users * GROUP_MONTHLY_RATE;
        let ad_revenue = users * AD_REVENUE_PER_USER;
        let affiliate_revenue = users * AFFILIATE_INCOME_PER_USER;
        let consulting_revenue = users * CONSULTING_UPTAKE * GROUP_MONTHLY_RATE;

        let total_revenue =
            subscription_revenue + ad_revenue + affiliate_revenue + consulting_revenue;

        MonthlyProjection {
            month,
            total_users: users,
            smart_users,
            pro_users,
            group_users,
            subscription_revenue,
            ad_revenue,
            affiliate_revenue,
            consulting_revenue,
            total_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_runs() {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        let table = engine.project().unwrap();

        assert_eq!(table.rows.len(), 12);
        assert_eq!(table.rows[0].month, 1);
        assert_eq!(table.rows[11].month, 12);
    }

    #[test]
    fn test_growth_applied_after_emission() {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        let table = engine.project().unwrap();

        // Month 1 is the unmodified starting base; growth compounds afterwards
        assert_relative_eq!(table.rows[0].total_users, 1000.0);
        assert_relative_eq!(table.rows[1].total_users, 1050.0);
        assert_relative_eq!(
            table.rows[11].total_users,
            1000.0 * 1.05_f64.powi(11),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_upgrade_transfer_with_defaults() {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        let table = engine.project().unwrap();
        let first = &table.rows[0];

        // 1000 users: 50 smart / 20 pro before upgrade, 10% of smart move over
        assert_relative_eq!(first.smart_users, 45.0);
        assert_relative_eq!(first.pro_users, 25.0);
        assert_relative_eq!(first.group_users, 10.0);
    }

    #[test]
    fn test_upgrade_conserves_paid_mass() {
        let config = ProjectionConfig {
            months: 24,
            conversion_rates: ConversionRates {
                free_to_smart: 0.3,
                free_to_pro: 0.1,
                smart_to_pro: 0.5,
                group_adoption: 0.05,
            },
            ..Default::default()
        };
        let table = ProjectionEngine::new(config.clone()).project().unwrap();

        for row in &table.rows {
            let pre_smart = row.total_users * config.conversion_rates.free_to_smart;
            let pre_pro = row.total_users * config.conversion_rates.free_to_pro;
            // The transfer moves mass, it never creates any
            assert!(row.pro_users <= pre_smart + pre_pro + 1e-9);
            assert_relative_eq!(
                row.smart_users + row.pro_users,
                pre_smart + pre_pro,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_revenue_sum_invariant() {
        let config = ProjectionConfig {
            months: 36,
            starting_users: 777.0,
            growth_rate: 0.08,
            ..Default::default()
        };
        let table = ProjectionEngine::new(config).project().unwrap();

        for row in &table.rows {
            assert_relative_eq!(
                row.total_revenue,
                row.subscription_revenue
                    + row.ad_revenue
                    + row.affiliate_revenue
                    + row.consulting_revenue,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_first_month_revenue_figures() {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        let table = engine.project().unwrap();
        let first = &table.rows[0];

        // 45 * 99 + 25 * 199 + 10 * 299 = 12420
        assert_relative_eq!(first.subscription_revenue, 12_420.0);
        assert_relative_eq!(first.ad_revenue, 5_000.0);
        assert_relative_eq!(first.affiliate_revenue, 10_000.0);
        // 1000 * 0.005 * 299
        assert_relative_eq!(first.consulting_revenue, 1_495.0);
        assert_relative_eq!(first.total_revenue, 28_915.0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let engine = ProjectionEngine::new(ProjectionConfig::default());
        let a = engine.project().unwrap();
        let b = engine.project().unwrap();

        for (ra, rb) in a.rows.iter().zip(&b.rows) {
            assert_eq!(ra.total_revenue.to_bits(), rb.total_revenue.to_bits());
        }
    }

    #[test]
    fn test_negative_growth_shrinks_base() {
        let config = ProjectionConfig {
            growth_rate: -0.1,
            ..Default::default()
        };
        let table = ProjectionEngine::new(config).project().unwrap();
        assert_relative_eq!(table.rows[1].total_users, 900.0);
    }

    #[test]
    fn test_zero_months_yields_empty_table() {
        let config = ProjectionConfig {
            months: 0,
            ..Default::default()
        };
        let table = ProjectionEngine::new(config).project().unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bad_rates = ProjectionConfig {
            conversion_rates: ConversionRates {
                free_to_smart: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            ProjectionEngine::new(bad_rates).project(),
            Err(ModelError::Validation(_))
        ));

        let bad_users = ProjectionConfig {
            starting_users: -10.0,
            ..Default::default()
        };
        assert!(ProjectionEngine::new(bad_users).project().is_err());

        let bad_growth = ProjectionConfig {
            growth_rate: f64::NAN,
            ..Default::default()
        };
        assert!(ProjectionEngine::new(bad_growth).project().is_err());
    }
}
