use crate::models::four_places;
use crate::resolve::ranked_url;
use crate::schema::Schema;
use bookmerge_rank::SourceRanker;
use bookmerge_types::Author;

fn author_id_values(author: &Author) -> Vec<String> {
    author.name.iter().cloned().collect()
}

pub fn author_schema(ranker: &SourceRanker) -> Schema<Author> {
    Schema::new(
        vec![
            optional!(Author, "audiobookStoreUrl", audiobook_store_url),
            optional!(Author, "bioHtml", bio_html),
            optional!(Author, "dnfCount", dnf_count),
            optional!(Author, "fiveStarCount", five_star_count),
            optional!(Author, "fourStarPlusCount", four_star_plus_count),
            optional!(Author, "goodreadsId", goodreads_id),
            optional!(Author, "goodreadsUrl", goodreads_url),
            optional!(Author, "mastodonHandle", mastodon_handle),
            optional!(Author, "maxRating", max_rating).with_canonical(four_places),
            optional!(Author, "meanDurationHours", mean_duration_hours).with_canonical(four_places),
            optional!(Author, "meanPages", mean_pages).with_canonical(four_places),
            optional!(Author, "minRating", min_rating).with_canonical(four_places),
            optional!(Author, "name", name),
            optional!(Author, "odds4", odds4).with_canonical(four_places),
            optional!(Author, "ownedCount", owned_count),
            optional!(Author, "picUrl", pic_url).with_resolver(ranked_url(ranker)),
            optional!(Author, "pronouns", pronouns),
            optional!(Author, "queer", queer),
            optional!(Author, "ratedCount", rated_count),
            collection!(Author, "ratings", ratings),
            optional!(Author, "rep", rep),
            optional!(Author, "siteUrl", site_url),
            optional!(Author, "storyGraphUrl", story_graph_url),
            optional!(Author, "twitterName", twitter_name),
            optional!(Author, "twitterUrl", twitter_url),
        ],
        author_id_values,
    )
}
