use serde_json::json;
use sinatra_genres::aggregate::{top_meta_genres, top_sub_genres, GenreAggregator};
use sinatra_genres::api::SinatraClient;
use sinatra_genres::genre_map::{FileGenreMapSource, GenreMap, LoadState};
use sinatra_genres::model::{FrequencyInput, GenreFrequencies, RankedGenre};
use sinatra_genres::render::{BarChart, BarPalette, TextRenderer, NO_DATA_PLACEHOLDER};
use sinatra_genres::{GenreMapResolver, GenrePipeline, MetaGenreRegistry, ProfileConfig};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn frequencies(value: serde_json::Value) -> GenreFrequencies {
    let input: FrequencyInput = serde_json::from_value(value).unwrap();
    GenreFrequencies::from_input(&input)
}

fn client(server: &MockServer) -> SinatraClient {
    SinatraClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[test]
fn test_meta_genres_ranked_and_laid_out() {
    let registry = MetaGenreRegistry::new();
    let highest = frequencies(json!({"rock": 40, "pop": 25, "jazz": 10}));

    let top = top_meta_genres(&highest, 5);
    assert_eq!(
        top,
        vec![
            RankedGenre::new("rock", 40.0),
            RankedGenre::new("pop", 25.0),
            RankedGenre::new("jazz", 10.0),
        ]
    );

    let chart = BarChart::layout(&top, &BarPalette::MetaGradient(&registry));
    let percents: Vec<f64> = chart.bars().iter().map(|b| b.percent).collect();
    assert_eq!(percents, vec![53.3, 33.3, 13.3]);
}

#[test]
fn test_sub_genre_that_is_a_meta_genre_is_excluded() {
    let registry = MetaGenreRegistry::new();
    let subs = frequencies(json!({"lo-fi": 5, "rock": 3}));
    let map: GenreMap = vec![("lo-fi", "electronic"), ("rock", "rock")]
        .into_iter()
        .collect();

    let top = top_sub_genres(&subs, &map, &registry, 5);
    assert_eq!(top, vec![RankedGenre::new("lo-fi", 5.0)]);
    assert_eq!(map.parent_of("lo-fi"), Some("electronic"));
}

#[tokio::test]
async fn test_failed_genre_map_fetch_is_absorbed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre-map"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = GenreMapResolver::new(client(&server));
    let map = resolver.load().await;

    assert!(map.is_empty());
    assert_eq!(resolver.state(), LoadState::Failed);
    assert_eq!(resolver.lookup("anything"), "other");
}

#[test]
fn test_empty_highest_renders_placeholder() {
    let registry = MetaGenreRegistry::new();
    let top = top_meta_genres(&frequencies(json!({})), 5);
    assert!(top.is_empty());

    let chart = BarChart::layout(&top, &BarPalette::MetaGradient(&registry));
    assert!(chart.is_placeholder());
    assert_eq!(
        TextRenderer::new().render(&chart),
        format!("{}\n", NO_DATA_PLACEHOLDER)
    );
}

#[tokio::test]
async fn test_genre_map_fetched_once_across_loads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre-map"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Lo-Fi": "Electronic"}))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resolver = Arc::new(GenreMapResolver::new(client(&server)));
    let (a, b, c) = tokio::join!(resolver.load(), resolver.load(), resolver.load());
    let d = resolver.load().await;

    assert_eq!(a.len(), 1);
    assert!(Arc::ptr_eq(&a, &b) && Arc::ptr_eq(&b, &c) && Arc::ptr_eq(&c, &d));
    assert_eq!(resolver.lookup("lo-fi"), "electronic");
    server.verify().await;
}

#[tokio::test]
async fn test_profile_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre-map"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Lo-Fi": "Electronic",
            "Shoegaze": "Rock",
            "Rock": "Rock"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public-profile/jules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "jules",
            "genres_data": {
                "highest": [["rock", 40], ["pop", 25], ["jazz", "n/a"]],
                "sub_genres": {"lo-fi": 5, "Rock": 9, "shoegaze": 15},
                "top_genre": "rock",
                "top_subgenre": {"sub_genre": "shoegaze"}
            }
        })))
        .mount(&server)
        .await;

    let config = ProfileConfig::new(server.uri());
    let client = config.client().unwrap();
    let resolver = Arc::new(config.resolver().unwrap());
    let mut pipeline = GenrePipeline::new(resolver, config.aggregator());

    let profile = GenrePipeline::load_profile(&client, "jules").await.unwrap();
    let charts = pipeline.charts(&profile).await;

    let meta: Vec<_> = charts.meta.bars().iter().map(|b| (b.name.as_str(), b.percent)).collect();
    assert_eq!(meta, vec![("rock", 61.5), ("pop", 38.5)]);

    let sub = charts.sub.as_ref().unwrap();
    let names: Vec<_> = sub.bars().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["shoegaze", "lo-fi"]);
    assert_eq!(sub.bars()[0].fill, MetaGenreRegistry::new().color_of("rock"));

    let taste = charts.current_taste.unwrap();
    assert_eq!(taste.sub_genre, "shoegaze");
}

#[tokio::test]
async fn test_local_genre_map_file() {
    let dir = TempDir::new().unwrap();
    let map_path = dir.path().join("genre-map.json");
    fs::write(&map_path, r#"{"City Pop": "Pop"}"#).unwrap();

    let resolver = GenreMapResolver::new(FileGenreMapSource::new(&map_path));
    let map = resolver.load().await;

    let subs = frequencies(json!({"city pop": 2}));
    let top = GenreAggregator::default().sub_view(
        &sinatra_genres::model::GenreProfile {
            sub_genres: subs,
            ..Default::default()
        },
        &map,
    );
    assert_eq!(top, vec![RankedGenre::new("city pop", 2.0)]);
}
