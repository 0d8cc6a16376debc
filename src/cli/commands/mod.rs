mod add;
mod list;
mod search;
mod show;

pub use add::cmd_add_movie;
pub use list::cmd_list_movies;
pub use search::cmd_search_movies;
pub use show::cmd_show_movie;
