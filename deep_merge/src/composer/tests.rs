//! Unit tests for layer composition and layer loading.

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Jail;
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

use super::{Layer, LayerComposer, Provenance, align_keys, environment_layer, load_file_layer};
use crate::{MergeError, Merger, Value};

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
    tags: Vec<String>,
}

#[fixture]
fn composer() -> LayerComposer {
    let mut composer = LayerComposer::new();
    composer.push_defaults(Value::from(
        json!({"host": "localhost", "port": 80, "tags": ["base"]}),
    ));
    composer.push_file(
        Value::from(json!({"port": 8080, "tags": ["file"]})),
        Some(Utf8PathBuf::from("server.toml")),
    );
    composer.push_environment(Value::from(json!({"host": "example.org"})));
    composer
}

#[rstest]
fn layers_keep_push_order(composer: LayerComposer) {
    let provenances: Vec<Provenance> = composer
        .layers()
        .iter()
        .map(Layer::provenance)
        .collect();
    assert_eq!(
        provenances,
        [
            Provenance::Defaults,
            Provenance::File,
            Provenance::Environment
        ]
    );
    let paths: Vec<Option<&Utf8PathBuf>> = composer.layers().iter().map(Layer::path).collect();
    assert_eq!(paths, [None, Some(&Utf8PathBuf::from("server.toml")), None]);
}

#[rstest]
fn later_layers_win(mut composer: LayerComposer) {
    composer.push_overrides(Value::from(json!({"port": 9000})));
    let server: Server = composer.extract().expect("composed layers decode");
    assert_eq!(
        server,
        Server {
            host: "example.org".to_owned(),
            port: 9000,
            tags: vec!["file".to_owned()],
        }
    );
}

#[rstest]
fn compose_with_applies_depth_limit(mut composer: LayerComposer) {
    composer.push_overrides(Value::from(json!({"nested": {"deeper": {"x": 1}}})));
    composer.push_overrides(Value::from(json!({"nested": {"deeper": {"y": 2}}})));
    let err = composer
        .compose_with(&Merger::new().with_max_depth(1))
        .expect_err("nested merge exceeds limit");
    assert!(matches!(err.as_ref(), MergeError::TooDeep { .. }));
    let merged = composer
        .compose_with(&Merger::new())
        .expect("unbounded merge succeeds");
    assert_eq!(merged, composer.compose());
}

#[rstest]
fn borrowed_layers_convert_to_owned() {
    let value = Value::from(json!({"a": 1}));
    let layer = Layer::overrides(Cow::Borrowed(&value));
    let owned: Layer<'static> = layer.into_owned();
    assert_eq!(owned.provenance(), Provenance::Overrides);
    assert_eq!(owned.into_value(), value);
}

#[rstest]
#[case::toml("layer.toml", "port = 8080\n[tls]\nenabled = true\n")]
#[case::json("layer.json", r#"{"port": 8080, "tls": {"enabled": true}}"#)]
fn file_layers_parse_by_extension(#[case] name: &str, #[case] contents: &str) {
    Jail::expect_with(|j| {
        j.create_file(name, contents)?;
        let value = load_file_layer(Utf8Path::new(name)).map_err(|err| err.to_string())?;
        assert_eq!(value, Value::from(json!({"port": 8080, "tls": {"enabled": true}})));
        Ok(())
    });
}

#[rstest]
#[case::unsupported("layer.ini", "port=1")]
#[case::malformed("layer.json", "{not json")]
fn bad_file_layers_are_reported(#[case] name: &str, #[case] contents: &str) {
    Jail::expect_with(|j| {
        j.create_file(name, contents)?;
        let err = load_file_layer(Utf8Path::new(name)).expect_err("layer is rejected");
        assert!(
            matches!(err.as_ref(), MergeError::File { path, .. } if path == name),
            "expected File error, got {err:?}"
        );
        Ok(())
    });
}

#[rstest]
fn push_file_from_records_path() {
    Jail::expect_with(|j| {
        j.create_file("chart.toml", "responsive = false\n")?;
        let mut composer = LayerComposer::new();
        composer.push_defaults(Value::from(json!({"responsive": true, "maintainAspectRatio": false})));
        composer
            .push_file_from(Utf8Path::new("chart.toml"))
            .map_err(|err| err.to_string())?;
        let layers = composer.clone().into_layers();
        assert_eq!(
            layers.last().and_then(Layer::path).map(|path| path.as_str()),
            Some("chart.toml")
        );
        assert_eq!(
            Value::from(composer.compose()),
            Value::from(json!({"responsive": false, "maintainAspectRatio": false}))
        );
        Ok(())
    });
}

#[rstest]
fn environment_layer_nests_on_double_underscore() {
    Jail::expect_with(|j| {
        j.set_env("CHART_PLUGINS__TITLE__TEXT", "Revenue");
        j.set_env("CHART_RESPONSIVE", "false");
        let value = environment_layer("CHART_").map_err(|err| err.to_string())?;
        assert_eq!(
            value,
            Value::from(json!({"plugins": {"title": {"text": "Revenue"}}, "responsive": false}))
        );
        Ok(())
    });
}

#[rstest]
fn environment_overrides_camel_case_defaults() {
    Jail::expect_with(|j| {
        j.set_env("CHART_MAINTAINASPECTRATIO", "true");
        j.set_env("CHART_PLUGINS__LEGEND__LABELS__COLOR", "red");
        j.set_env("CHART_ANIMATION", "false");
        let mut composer = LayerComposer::new();
        composer.push_defaults(Value::from(json!({
            "maintainAspectRatio": false,
            "plugins": {"legend": {"labels": {"color": "#a7a7a7"}}},
        })));
        composer.push_environment(environment_layer("CHART_").map_err(|err| err.to_string())?);
        assert_eq!(
            Value::from(composer.compose()),
            Value::from(json!({
                "maintainAspectRatio": true,
                "plugins": {"legend": {"labels": {"color": "red"}}},
                "animation": false,
            }))
        );
        Ok(())
    });
}

#[rstest]
#[case::exact_spelling_wins(
    json!({"Color": 1, "color": 2}),
    json!({"color": 3}),
    json!({"color": 3})
)]
#[case::nested_keys_follow_reference(
    json!({"plugins": {"legend": {"pointStyle": "circle"}}}),
    json!({"plugins": {"legend": {"pointstyle": "rect"}}}),
    json!({"plugins": {"legend": {"pointStyle": "rect"}}})
)]
#[case::unknown_keys_are_kept(
    json!({"indexAxis": "x"}),
    json!({"borderwidth": 2}),
    json!({"borderwidth": 2})
)]
#[case::scalar_reference_stops_descent(
    json!({"title": "Sales"}),
    json!({"TITLE": {"text": "Revenue"}}),
    json!({"title": {"text": "Revenue"}})
)]
fn keys_align_ignoring_case(
    #[case] reference: serde_json::Value,
    #[case] layer: serde_json::Value,
    #[case] expected: serde_json::Value,
) {
    let reference = Value::from(reference).into_mapping().unwrap_or_default();
    assert_eq!(align_keys(Value::from(layer), &reference), Value::from(expected));
}
