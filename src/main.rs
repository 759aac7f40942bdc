use hackspace::format::{
    active_label, format_compact_inr, format_inr, result_heading, status_label, tier_label,
};
use hackspace::{SeedConfig, SpaceRegistry, SponsorRegistry};
use hackspace::domain::{SpaceStatus, SponsorTier};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Load seed data (embedded, or HACKSPACE_SEED_DIR)
    let seed = SeedConfig::from_env().load()?;

    // 2️⃣ Build both registries from the same snapshot
    let spaces = SpaceRegistry::from_seed(&seed)?;
    let sponsors = SponsorRegistry::from_seed(&seed)?;

    // 3️⃣ Report what a fresh session would show
    let counts = spaces.status_counts();
    info!(total = counts.all, "space catalog ready");
    for status in SpaceStatus::ALL {
        info!(status = status_label(status), count = counts.get(status));
    }

    let stats = sponsors.stats();
    info!(
        total = stats.total_count,
        active = stats.active_count,
        platinum = stats.tier_count(SponsorTier::Platinum),
        contribution = %format_compact_inr(stats.total_contribution),
        cities = stats.unique_city_count,
        "sponsor roster ready"
    );
    info!(
        tier = tier_label(sponsors.filters().tier()),
        "{}",
        result_heading(sponsors.view().len())
    );
    for sponsor in sponsors.view() {
        info!(
            tier = tier_label(Some(sponsor.tier)),
            status = active_label(sponsor.is_active),
            contribution = %format_inr(sponsor.contribution),
            city = %sponsor.city,
            "{}",
            sponsor.name
        );
    }

    Ok(())
}
