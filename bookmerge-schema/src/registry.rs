use crate::models::{author_schema, book_schema, narrator_schema, series_schema};
use crate::schema::Schema;
use bookmerge_rank::SourceRanker;
use bookmerge_types::{Author, Book, Model, Narrator, Series};

/// One schema per model type, built once at startup and passed wherever
/// merging happens.
#[derive(Debug)]
pub struct Schemas {
    pub book: Schema<Book>,
    pub author: Schema<Author>,
    pub narrator: Schema<Narrator>,
    pub series: Schema<Series>,
}

impl Schemas {
    pub fn new(ranker: &SourceRanker) -> Self {
        Self {
            book: book_schema(ranker),
            author: author_schema(ranker),
            narrator: narrator_schema(),
            series: series_schema(),
        }
    }

    /// The schema for `M`.
    pub fn of<M: HasSchema>(&self) -> &Schema<M> {
        M::schema(self)
    }
}

/// Model types with a schema in [`Schemas`].
pub trait HasSchema: Model {
    fn schema(schemas: &Schemas) -> &Schema<Self>;
}

impl HasSchema for Book {
    fn schema(schemas: &Schemas) -> &Schema<Self> {
        &schemas.book
    }
}

impl HasSchema for Author {
    fn schema(schemas: &Schemas) -> &Schema<Self> {
        &schemas.author
    }
}

impl HasSchema for Narrator {
    fn schema(schemas: &Schemas) -> &Schema<Self> {
        &schemas.narrator
    }
}

impl HasSchema for Series {
    fn schema(schemas: &Schemas) -> &Schema<Self> {
        &schemas.series
    }
}
