use crate::entities::{movies, prelude::*};
use crate::models::movie::{Movie, MovieFilter, NewMovie};
use anyhow::Result;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};
use tracing::debug;

const LIKE_ESCAPE: char = '!';

/// Repository for the `movies` table
pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: movies::Model) -> Movie {
        Movie {
            id: m.id,
            title: m.title,
            description: m.description,
            poster_url: m.poster_url,
            release_year: m.release_year,
            quality: m.quality,
            category: m.category,
            size: m.size,
            language: m.language,
            download_links: m.download_links,
            is_trending: m.is_trending != 0,
            created_at: m.created_at,
        }
    }

    fn newest_first(query: Select<Movies>) -> Select<Movies> {
        query
            .order_by_desc(movies::Column::CreatedAt)
            .order_by_desc(movies::Column::Id)
    }

    pub async fn count_all(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }

    pub async fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>> {
        let query = match filter {
            MovieFilter::All => Movies::find(),
            MovieFilter::Category(category) => {
                Movies::find().filter(movies::Column::Category.eq(category.as_str()))
            }
            MovieFilter::Trending => Movies::find().filter(movies::Column::IsTrending.eq(1)),
        };

        let rows = Self::newest_first(query).all(&self.conn).await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Substring match on title. With `literal_wildcards` unset, `%` and `_`
    /// in `query` keep their LIKE meaning.
    pub async fn search_by_title(
        &self,
        query: &str,
        literal_wildcards: bool,
    ) -> Result<Vec<Movie>> {
        let pattern = if literal_wildcards {
            LikeExpr::new(format!("%{}%", escape_like(query))).escape(LIKE_ESCAPE)
        } else {
            LikeExpr::new(format!("%{query}%"))
        };

        debug!(query, literal_wildcards, "Searching movies by title");

        let rows = Self::newest_first(
            Movies::find().filter(Expr::col((Movies, movies::Column::Title)).like(pattern)),
        )
        .all(&self.conn)
        .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let row = Movies::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn insert(&self, movie: &NewMovie) -> Result<i32> {
        let links = serde_json::to_string(&movie.download_links)?;
        let created_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let active_model = movies::ActiveModel {
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            poster_url: Set(movie.poster_url.clone()),
            release_year: Set(movie.release_year),
            quality: Set(movie.quality.clone()),
            category: Set(movie.category.clone()),
            size: Set(movie.size.clone()),
            language: Set(movie.language.clone()),
            download_links: Set(Some(links)),
            is_trending: Set(i32::from(movie.is_trending)),
            created_at: Set(created_at),
            ..Default::default()
        };

        let res = Movies::insert(active_model).exec(&self.conn).await?;
        Ok(res.last_insert_id)
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
