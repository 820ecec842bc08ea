use criterion::{criterion_group, criterion_main, Criterion};

use formshot::form::{validate, FormValues};
use formshot::platform::clipboard::MemoryClipboard;
use formshot::platform::notify::MemoryNotifier;
use formshot::rendering::layout::layout_element;
use formshot::rendering::tree::{build_surface, SurfaceState};
use formshot::{capture::capture_form, Field, FormConfig, FormSession};

fn filled_values() -> FormValues {
    FormValues {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "difference-engine".to_string(),
        confirm_password: "difference-engine".to_string(),
    }
}

fn bench_validate(c: &mut Criterion) {
    let values = filled_values();
    c.bench_function("validate_filled_form", |b| b.iter(|| validate(&values)));
}

fn bench_surface_and_layout(c: &mut Criterion) {
    let config = FormConfig::default();
    let values = filled_values();
    let errors = validate(&values);

    c.bench_function("build_surface_and_layout", |b| {
        b.iter(|| {
            let tree = build_surface(&SurfaceState {
                values: &values,
                errors: &errors,
                is_submitting: false,
                captured: None,
                config: &config,
            });
            let form = tree.form_root().expect("form panel");
            layout_element(form, config.viewport)
        })
    });
}

fn bench_capture_form(c: &mut Criterion) {
    let config = FormConfig::default();
    let values = filled_values();
    let errors = validate(&values);
    let tree = build_surface(&SurfaceState {
        values: &values,
        errors: &errors,
        is_submitting: false,
        captured: None,
        config: &config,
    });

    c.bench_function("capture_form_to_png", |b| {
        b.iter(|| capture_form(&tree, &config).expect("capture"))
    });
}

fn bench_submit_flow(c: &mut Criterion) {
    c.bench_function("submit_flow_memory_backends", |b| {
        b.iter(|| {
            let mut session = FormSession::with_backends(
                FormConfig::default(),
                Box::new(MemoryClipboard::new()),
                Box::new(MemoryNotifier::new()),
            )
            .expect("session");
            session.set_field(Field::Name, "Ada Lovelace");
            session.set_field(Field::Email, "ada@example.com");
            session.set_field(Field::Password, "difference-engine");
            session.set_field(Field::ConfirmPassword, "difference-engine");
            session.submit().expect("submit")
        })
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_surface_and_layout,
    bench_capture_form,
    bench_submit_flow
);
criterion_main!(benches);
