//! Request options: relation expansion and revalidation

/// Which relations the service should expand inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// A single relation path, e.g. `linkGroups.links`
    One(String),
    /// Several relations, sent as `populate[0]=..&populate[1]=..`
    Many(Vec<String>),
    /// Every first-level relation (`populate=*`)
    All,
}

impl Populate {
    pub fn one(relation: impl Into<String>) -> Self {
        Populate::One(relation.into())
    }

    pub fn many<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Populate::Many(relations.into_iter().map(Into::into).collect())
    }

    /// Query pairs for this directive, in order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            Populate::One(relation) => vec![("populate".to_string(), relation.clone())],
            Populate::Many(relations) => relations
                .iter()
                .enumerate()
                .map(|(i, relation)| (format!("populate[{}]", i), relation.clone()))
                .collect(),
            Populate::All => vec![("populate".to_string(), "*".to_string())],
        }
    }
}

/// Options for a single read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub populate: Option<Populate>,
    /// Seconds a cached copy may be reused; 0 means always revalidate
    pub revalidate: u64,
    /// Extra query parameters (sorting, filters)
    pub query: Vec<(String, String)>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(mut self, populate: Populate) -> Self {
        self.populate = Some(populate);
        self
    }

    pub fn revalidate(mut self, seconds: u64) -> Self {
        self.revalidate = seconds;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// `Cache-Control` value carrying the revalidation interval
    pub fn cache_control(&self) -> String {
        if self.revalidate == 0 {
            "no-cache".to_string()
        } else {
            format!("max-age={}", self.revalidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_populate_list_is_indexed() {
        let populate = Populate::many(["socialLinks", "serviceOptions"]);
        assert_eq!(
            populate.query_pairs(),
            owned(&[
                ("populate[0]", "socialLinks"),
                ("populate[1]", "serviceOptions")
            ])
        );
    }

    #[test]
    fn test_populate_scalar_and_wildcard() {
        assert_eq!(
            Populate::one("linkGroups.links").query_pairs(),
            owned(&[("populate", "linkGroups.links")])
        );
        assert_eq!(Populate::All.query_pairs(), owned(&[("populate", "*")]));
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(FetchOptions::new().cache_control(), "no-cache");
        assert_eq!(FetchOptions::new().revalidate(60).cache_control(), "max-age=60");
    }

    #[test]
    fn test_builder() {
        let options = FetchOptions::new()
            .query("sort", "order:asc")
            .populate(Populate::All);
        assert_eq!(options.populate, Some(Populate::All));
        assert_eq!(options.revalidate, 0);
        assert_eq!(options.query, owned(&[("sort", "order:asc")]));
    }
}
