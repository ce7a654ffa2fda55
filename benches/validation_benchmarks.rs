use omnify::prelude::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_kana_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("kana_validation");

    let values = vec!["ヤマダ タロウ", "やまだ たろう", "ﾔﾏﾀﾞ ﾀﾛｳ", "山田太郎"];

    group.bench_function("precompiled_rule", |b| {
        let rule = KanaRule::new(KATAKANA_FULL_WIDTH.clone()).unwrap();
        b.iter(|| {
            for value in &values {
                black_box(rule.is_valid(black_box(value)));
            }
        })
    });

    group.bench_function("validate_with_config", |b| {
        b.iter(|| {
            for value in &values {
                black_box(validate(black_box(value), &KANA_ANY));
            }
        })
    });

    group.bench_function("build_pattern", |b| {
        b.iter(|| black_box(build_pattern(black_box(&KANA_ANY))))
    });

    group.finish();
}

fn bench_error_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_mapping");

    let mut errors = serde_json::Map::new();
    for i in 0..50 {
        errors.insert(
            format!("items.{}.name", i),
            json!([format!("The items.{}.name field is required.", i)]),
        );
    }
    let error = json!({
        "response": {
            "status": 422,
            "data": {"message": "The given data was invalid.", "errors": errors}
        }
    });

    group.bench_function("map_field_errors_50", |b| {
        b.iter(|| black_box(map_field_errors(Some(black_box(&error)))))
    });

    group.bench_function("extract_summary_message", |b| {
        b.iter(|| black_box(extract_summary_message(Some(black_box(&error)))))
    });

    group.finish();
}

fn bench_message_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_resolution");

    let catalog = MessageCatalog::new();
    catalog.register("required", "en", "${displayName} cannot be blank");
    let params = TemplateParams::new().with("displayName", "氏名");

    group.bench_function("builtin_current_locale", |b| {
        b.iter(|| black_box(catalog.resolve(black_box("maxLength"), &params)))
    });

    group.bench_function("custom_fallback_locale", |b| {
        b.iter(|| black_box(catalog.resolve_in(black_box("th"), "required", &params)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_kana_validation,
    bench_error_mapping,
    bench_message_resolution
);
criterion_main!(benches);
