use crate::models::{people, two_places};
use crate::resolve::{earlier, keep_first, longer_text, ranked_url, resolver};
use crate::schema::Schema;
use bookmerge_rank::SourceRanker;
use bookmerge_types::Book;

/// Author, publication year, title.
fn book_id_values(book: &Book) -> Vec<String> {
    [
        book.author_name.clone(),
        book.publish_year().map(|y| y.to_string()),
        book.title.clone(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn book_schema(ranker: &SourceRanker) -> Schema<Book> {
    Schema::new(
        vec![
            optional!(Book, "audiobookStoreSku", audiobook_store_sku),
            optional!(Book, "audiobookStoreUrl", audiobook_store_url),
            optional!(Book, "authorName", author_name)
                .with_canonical(people)
                .with_resolver(resolver(longer_text)),
            optional!(Book, "datePublish", date_publish).with_resolver(resolver(earlier)),
            optional!(Book, "datePurchase", date_purchase),
            optional!(Book, "dateRead", date_read),
            optional!(Book, "dnf", dnf),
            optional!(Book, "durationHours", duration_hours).with_canonical(two_places),
            optional!(Book, "feelBad", feel_bad),
            optional!(Book, "feelGood", feel_good),
            optional!(Book, "genre", genre),
            optional!(Book, "goodreadsUrl", goodreads_url),
            optional!(Book, "hea", hea),
            optional!(Book, "imageUrl", image_url).with_resolver(ranked_url(ranker)),
            optional!(Book, "isbn", isbn),
            optional!(Book, "location", location),
            collection!(Book, "mc1", mc1),
            collection!(Book, "mc2", mc2),
            optional!(Book, "narratorName", narrator_name)
                .with_canonical(people)
                .with_resolver(resolver(longer_text)),
            optional!(Book, "pages", pages),
            optional!(Book, "pairing", pairing),
            optional!(Book, "pov", pov),
            optional!(Book, "publisherDescription", publisher_description),
            optional!(Book, "publisherName", publisher_name),
            collection!(Book, "ratings", ratings),
            optional!(Book, "reading", reading),
            optional!(Book, "seriesName", series_name).with_resolver(resolver(keep_first)),
            optional!(Book, "seriesPart", series_part),
            optional!(Book, "source", source),
            optional!(Book, "storygraphUrl", storygraph_url),
            optional!(Book, "synopsis", synopsis),
            collection!(Book, "tags", tags),
            optional!(Book, "title", title),
            optional!(Book, "warnings", warnings),
        ],
        book_id_values,
    )
}
