mod area;
mod area_path;
mod filter;
mod lenient;
mod page;
mod route;
mod search;
mod sort;

pub use area::{Area, HierarchyLevel};
pub use area_path::{AreaPath, PATH_SEPARATOR, ROOT_LEVEL_NAME};
pub use filter::{ClimbStyle, Criterion, FilterSpec};
pub use page::Page;
pub use route::{Route, RouteComment, RouteSummary};
pub use search::{AreaMatch, RouteMatch, SearchHit, SearchResults};
pub use sort::{SortDirection, SortKey, SortSpec};
