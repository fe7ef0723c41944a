use crate::corpus::Corpus;
use crate::grade::GradeScale;
use crate::models::{Area, HierarchyLevel, Route};

pub(crate) struct RouteBuilder {
    route: Route,
}

pub(crate) fn route(name: &str, grade: &str) -> RouteBuilder {
    RouteBuilder {
        route: Route {
            route_id: name.to_lowercase().replace(' ', "-"),
            route_name: name.to_string(),
            route_grade: grade.to_string(),
            route_type: vec!["Trad".to_string()],
            route_pitches: 1,
            ..Route::default()
        },
    }
}

impl RouteBuilder {
    pub(crate) fn types(mut self, types: &[&str]) -> Self {
        self.route.route_type = types.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub(crate) fn stars(mut self, stars: f64, votes: u32) -> Self {
        self.route.route_stars = stars;
        self.route.route_votes = votes;
        self
    }

    pub(crate) fn lr(mut self, position: i64) -> Self {
        self.route.route_lr = Some(position);
        self
    }

    pub(crate) fn pitches(mut self, pitches: u32) -> Self {
        self.route.route_pitches = pitches;
        self
    }

    pub(crate) fn tag(mut self, category: &str, tag: &str) -> Self {
        self.route
            .route_tags
            .entry(category.to_string())
            .or_default()
            .push(tag.to_string());
        self
    }

    pub(crate) fn build(self) -> Route {
        self.route
    }
}

/// `path` is `/`-separated and gets the exported `All Locations` root.
pub(crate) fn area(path: &str, routes: Vec<RouteBuilder>) -> Area {
    let names: Vec<&str> = path.split('/').collect();
    let mut hierarchy = vec![level(1, "All Locations")];
    hierarchy.extend(
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| level(idx as u32 + 2, name)),
    );
    let leaf = names.last().copied().unwrap_or_default();
    Area {
        area_id: leaf.to_lowercase().replace(' ', "-"),
        area_name: leaf.to_string(),
        area_hierarchy: hierarchy,
        routes: routes.into_iter().map(RouteBuilder::build).collect(),
        ..Area::default()
    }
}

fn level(level: u32, name: &str) -> HierarchyLevel {
    HierarchyLevel {
        level,
        area_hierarchy_name: name.to_string(),
        area_hierarchy_url: String::new(),
    }
}

pub(crate) fn corpus(areas: Vec<Area>) -> Corpus {
    Corpus::from_areas(areas, &GradeScale::standard()).expect("build corpus")
}

pub(crate) fn names<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a crate::corpus::RouteEntry>,
{
    entries
        .into_iter()
        .map(|entry| entry.route.route_name.clone())
        .collect()
}

/// Squamish and California areas shared by filter, sort and search tests.
pub(crate) fn sample_corpus() -> Corpus {
    corpus(vec![
        area(
            "Canada/British Columbia/Squamish/The Chief",
            vec![
                route("Exasperator Crack", "5.10c").stars(3.8, 120).lr(4),
                route("Grand Wall", "5.11a").stars(3.9, 300).pitches(9).lr(2),
                route("Diedre", "5.8").stars(3.5, 200).pitches(6).lr(1),
            ],
        ),
        area(
            "USA/California/Yosemite/El Capitan",
            vec![
                route("Nose, The", "5.14a").stars(4.0, 500).pitches(31).lr(10),
                route("East Buttress", "5.10b").stars(3.2, 80).pitches(12).lr(3),
            ],
        ),
        area(
            "USA/California/Joshua Tree",
            vec![
                route("Exasperator Crack", "5.10a").stars(2.0, 4),
                route("Illusion Dweller", "5.10b")
                    .types(&["Trad", "Sport"])
                    .stars(3.6, 150)
                    .tag("Difficulty & Safety", "sandbag"),
                route("Mystery Slab", "5.frobnicate").stars(1.0, 2),
                route("Bolted Face", "5.11c").types(&["Sport"]).stars(3.0, 40),
            ],
        ),
        area(
            "USA/California/Bishop",
            vec![
                route("Boulder Problem", "5.12a").types(&["Boulder"]),
                route("Aid Line", "5.9").types(&["Trad", "Aid"]),
            ],
        ),
    ])
}
