//! Rendering benchmarks for paths and filter expressions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scim_filter::{AttributePath, Expression, Path, Token};

fn balanced(depth: usize) -> Expression {
    if depth == 0 {
        return Expression::attribute(AttributePath::new("userName"), Token::Eq, "\"bjensen\"");
    }
    let op = if depth % 2 == 0 { Expression::and } else { Expression::or };
    op(balanced(depth - 1), balanced(depth - 1))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for depth in [2usize, 6, 10] {
        let expr = balanced(depth);
        group.bench_with_input(BenchmarkId::new("balanced", depth), &expr, |b, expr| {
            b.iter(|| black_box(expr).to_string())
        });
    }

    let path = Path::new("emails")
        .with_uri_prefix("urn:ietf:params:scim:schemas:core:2.0:User")
        .with_value_expression(balanced(4))
        .with_sub_attribute("value");
    group.bench_function("path", |b| b.iter(|| black_box(&path).to_string()));
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
