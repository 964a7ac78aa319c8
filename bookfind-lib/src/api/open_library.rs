use log::{info, trace};
use serde::Deserialize;

use crate::query::SearchQuery;

use super::{Client, Error};

const SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// One page of the search endpoint response, any extra fields ignored.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct SearchPage {
    #[serde(default)]
    docs: Vec<Doc>,
}

/// One raw record of the `docs` array.
///
/// Every field of interest is optional, the catalog omits whatever it does
/// not know about an edition.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, Default))]
pub(crate) struct Doc {
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) author_name: Vec<String>,
    pub(crate) first_publish_year: Option<i32>,
    pub(crate) cover_i: Option<u64>,
    #[serde(default)]
    pub(crate) isbn: Vec<String>,
    #[serde(default)]
    pub(crate) edition_key: Vec<String>,
    pub(crate) key: Option<String>,
}

pub(crate) fn search<C: Client>(query: &SearchQuery) -> Result<Vec<Doc>, Error> {
    info!(
        "Searching Open Library by {} for '{}'",
        query.field(),
        query.text()
    );
    let url = search_url(query);

    let client = C::default();
    let SearchPage { docs } = client.get_json(&url)?;

    trace!("Request returned {} docs", docs.len());

    // an empty page is a valid result, not an error
    Ok(docs)
}

fn search_url(query: &SearchQuery) -> String {
    format!(
        "{SEARCH_URL}?{}={}",
        query.field().param(),
        urlencoding::encode(query.text())
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{assert_url, impl_json_producer, MockClient, NetworkErrorProducer},
        query::{SearchField, SearchQuery},
        ErrorKind,
    };

    use super::{search, SearchPage};

    const SEARCH_JSON: &str = include_str!("../../tests/data/openlibrary_search.json");

    impl_json_producer! {
        ValidJsonProducer => Ok(SEARCH_JSON.to_owned()),
        NoDocsFieldProducer => Ok(r#"{"numFound": 0, "start": 0}"#.to_owned()),
        NotJsonProducer => Ok("This is not valid JSON".to_owned()),
    }

    fn title_query(text: &str) -> SearchQuery {
        SearchQuery::new(text, SearchField::Title).unwrap()
    }

    #[test]
    fn json_can_be_deserialized_to_search_page() {
        let page: SearchPage = serde_json::from_str(SEARCH_JSON).unwrap();
        assert_eq!(5, page.docs.len());
    }

    #[test]
    fn valid_json_produces_docs() {
        let docs = search::<MockClient<ValidJsonProducer>>(&title_query("dune"))
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        assert_eq!(5, docs.len());
        assert_eq!(Some("Dune"), docs[0].title.as_deref());
    }

    #[test]
    fn empty_docs_is_not_an_error() {
        let docs = search::<MockClient>(&title_query("dune"))
            .expect("An empty docs array should deserialize");

        assert!(docs.is_empty());
    }

    #[test]
    fn missing_docs_field_defaults_to_empty() {
        let docs = search::<MockClient<NoDocsFieldProducer>>(&title_query("dune"))
            .expect("A page without a docs field should deserialize");

        assert!(docs.is_empty());
    }

    #[test]
    fn network_error_is_io() {
        let err = search::<MockClient<NetworkErrorProducer>>(&title_query("dune"))
            .expect_err("NetworkErrorProducer should always cause an error");

        assert_eq!(ErrorKind::IO, err.kind());
    }

    #[test]
    fn invalid_json_is_deserialize_error() {
        let err = search::<MockClient<NotJsonProducer>>(&title_query("dune"))
            .expect_err("NotJsonProducer should always cause an error");

        assert_eq!(ErrorKind::Deserialize, err.kind());
    }

    #[test]
    fn title_url_format_is_correct() {
        search::<MockClient>(&title_query("dune messiah")).unwrap();
        assert_url!("https://openlibrary.org/search.json?title=dune%20messiah");
    }

    #[test]
    fn author_url_format_is_correct() {
        let query = SearchQuery::new("frank herbert", SearchField::Author).unwrap();
        search::<MockClient>(&query).unwrap();
        assert_url!("https://openlibrary.org/search.json?author=frank%20herbert");
    }

    #[test]
    fn year_url_format_is_correct() {
        let query = SearchQuery::new("1965", SearchField::Year).unwrap();
        search::<MockClient>(&query).unwrap();
        assert_url!("https://openlibrary.org/search.json?first_publish_year=1965");
    }
}
