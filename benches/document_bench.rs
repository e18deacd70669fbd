use cadastro::{classify_and_validate, cnpj, cpf};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_cpf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpf");

    group.bench_function("validate_formatted", |b| {
        b.iter(|| cpf::validate(black_box("123.456.789-09")));
    });

    group.bench_function("validate_unformatted", |b| {
        b.iter(|| cpf::validate(black_box("12345678909")));
    });

    group.bench_function("format", |b| {
        b.iter(|| cpf::format(black_box("12345678909")));
    });

    group.bench_function("generate", |b| {
        b.iter(cpf::generate);
    });

    group.finish();
}

fn bench_cnpj(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnpj");

    group.bench_function("validate_alphanumeric", |b| {
        b.iter(|| cnpj::validate(black_box("12.ABC.345/01DE-35")));
    });

    group.bench_function("validate_legacy", |b| {
        b.iter(|| cnpj::validate(black_box("11.222.333/0001-81")));
    });

    group.bench_function("format", |b| {
        b.iter(|| cnpj::format(black_box("12ABC34501DE35")));
    });

    group.bench_function("generate", |b| {
        b.iter(cnpj::generate);
    });

    group.bench_function("generate_legacy", |b| {
        b.iter(cnpj::generate_legacy);
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_and_validate", |b| {
        b.iter(|| classify_and_validate(black_box("12.ABC.345/01DE-35")));
    });
}

criterion_group!(benches, bench_cpf, bench_cnpj, bench_classify);
criterion_main!(benches);
