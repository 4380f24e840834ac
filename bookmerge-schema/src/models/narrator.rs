use crate::attribute::Attribute;
use crate::models::two_places;
use crate::schema::Schema;
use bookmerge_types::Narrator;

fn narrator_id_values(narrator: &Narrator) -> Vec<String> {
    narrator.name.iter().cloned().collect()
}

pub fn narrator_schema() -> Schema<Narrator> {
    Schema::new(
        vec![
            optional!(Narrator, "accent", accent),
            optional!(Narrator, "goodreadsUrl", goodreads_url),
            Attribute::derived("meanPagesPerHour", Narrator::mean_pages_per_hour),
            optional!(Narrator, "name", name),
            collection!(Narrator, "negatives", negatives),
            optional!(Narrator, "ownedCount", owned_count),
            collection!(Narrator, "ratings", ratings),
            optional!(Narrator, "siteUrl", site_url),
            optional!(Narrator, "totalDurationHours", total_duration_hours).with_canonical(two_places),
            optional!(Narrator, "totalPages", total_pages),
            optional!(Narrator, "twitterUrl", twitter_url),
        ],
        narrator_id_values,
    )
}
