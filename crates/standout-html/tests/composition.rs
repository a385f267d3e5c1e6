//! Layout, partial and include composition.

use minijinja::Value;
use serde::Serialize;
use serde_json::json;
use standout_html::{Config, FunctionRegistry, MemorySource, Renderer};

#[derive(Serialize)]
#[allow(non_snake_case)]
struct Welcome {
    Title: String,
    Name: String,
}

fn renderer(views: MemorySource) -> Renderer {
    Renderer::new(Config::new(views))
}

#[test]
fn test_layout_wraps_named_template() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "{{ Title }} -- {% include \"home\" %}")
            .with("home", "Hi {{ Name }}"),
    );
    let data = Welcome {
        Title: "Welcome".into(),
        Name: "Ada".into(),
    };

    assert_eq!(r.render_page("home", &data).unwrap(), "Welcome -- Hi Ada");
}

#[test]
fn test_shared_layout_serves_several_pages() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "<title>{{ title }}</title><main>{% include page %}</main>")
            .with("home", "{% for i in items %}{{ partial(\"item\", i) }}{% endfor %}")
            .with("about", "About {{ include(\"signature\") }}")
            .with("signature", "{{ title }}")
            .with("partials/item", "<li>{{ this }}</li>"),
    );
    let data = json!({ "title": "Shop", "items": ["a", "b"] });

    assert_eq!(
        r.render_page("home", &data).unwrap(),
        "<title>Shop</title><main><li>a</li><li>b</li></main>"
    );
    assert_eq!(
        r.render_page("about", &data).unwrap(),
        "<title>Shop</title><main>About Shop</main>"
    );
    assert_eq!(
        r.cache().names(),
        vec!["about", "home", "layout", "partials/item", "signature"]
    );
}

#[test]
fn test_partial_equals_standalone_fragment_render() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "<ul>{{ partial(\"card\", item) }}</ul>")
            .with("home", "")
            .with("partials/card", "<li>{{ label }}: {{ count }}</li>"),
    );
    let item = json!({ "label": "apples", "count": 3 });

    let page = r.render_page("home", &json!({ "item": item })).unwrap();
    let fragment = r.render_fragment("partials/card", &item).unwrap();

    assert_eq!(fragment, "<li>apples: 3</li>");
    assert_eq!(page, format!("<ul>{}</ul>", fragment));
}

#[test]
fn test_partial_output_is_not_escaped_twice() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "{{ partial(\"quote\", text) }}")
            .with("home", "")
            .with("partials/quote", "<q>{{ this }}</q>"),
    );

    let html = r.render_page("home", &json!({ "text": "a < b" })).unwrap();
    assert_eq!(html, "<q>a &lt; b</q>");
}

#[test]
fn test_include_sees_enclosing_data() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "{% include \"home\" %}")
            .with("home", "[{{ include(\"sidebar\") }}]")
            .with("sidebar", "user={{ user }}"),
    );

    let html = r.render_page("home", &json!({ "user": "ada" })).unwrap();
    assert_eq!(html, "[user=ada]");
}

#[test]
fn test_include_inside_partial_sees_partial_data() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "{% include \"home\" %}")
            .with("home", "{{ name }}/{{ partial(\"card\", child) }}")
            .with("partials/card", "{{ include(\"badge\") }}")
            .with("badge", "<{{ name }}>"),
    );

    let html = r
        .render_page("home", &json!({ "name": "outer", "child": { "name": "inner" } }))
        .unwrap();
    assert_eq!(html, "outer/<inner>");
}

#[test]
fn test_include_is_bound_per_render_call() {
    let r = renderer(
        MemorySource::new()
            .with("layout", "{% include \"home\" %}")
            .with("home", "{{ include(\"who\") }}")
            .with("who", "{{ who }}"),
    );

    // The cached template must not remember the first call's data
    assert_eq!(r.render_page("home", &json!({ "who": "first" })).unwrap(), "first");
    assert_eq!(r.render_page("home", &json!({ "who": "second" })).unwrap(), "second");
}

#[test]
fn test_registered_functions_available_in_templates_and_partials() {
    let functions = FunctionRegistry::new()
        .with_function("shout", Value::from_function(|s: String| s.to_uppercase()))
        .unwrap();
    let views = MemorySource::new()
        .with("layout", "{{ shout(title) }} {% include \"home\" %}")
        .with("home", "{{ partial(\"tag\", \"new\") }}")
        .with("partials/tag", "{{ shout(this) }}");
    let r = Renderer::new(Config::new(views).with_functions(functions));

    let html = r.render_page("home", &json!({ "title": "sale" })).unwrap();
    assert_eq!(html, "SALE NEW");
}

#[test]
fn test_custom_layout_name() {
    let views = MemorySource::new()
        .with("base", "<div>{% include \"home\" %}</div>")
        .with("home", "x");
    let r = Renderer::new(Config::new(views).with_layout("base"));

    assert_eq!(r.render_page("home", &()).unwrap(), "<div>x</div>");
    assert!(r.cache().contains("base"));
}

#[test]
fn test_renderer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Renderer>();
    assert_send_sync::<standout_html::Page>();
}
