use crate::schema::Schema;
use bookmerge_types::Series;

fn series_id_values(series: &Series) -> Vec<String> {
    series.name.iter().cloned().collect()
}

pub fn series_schema() -> Schema<Series> {
    Schema::new(
        vec![
            optional!(Series, "goodreadsUrl", goodreads_url),
            optional!(Series, "name", name),
            optional!(Series, "ownedCount", owned_count),
            collection!(Series, "ratings", ratings),
        ],
        series_id_values,
    )
}
