use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gql_parser::{Bump, Lexer, Parser};

const QUERY: &str = r#"
query ExampleQuery($topProductsFirst: Int) {
  me {
    id
    name
    reviews {
      body
      product {
        name
        price
      }
    }
  }
  topProducts(first: $topProductsFirst) {
    name
    price
    reviews {
      ...reviewFields
    }
  }
}

fragment reviewFields on Review {
  body
  author {
    name
  }
}
"#;

fn bench_query_lexer(c: &mut Criterion) {
    c.bench_function("lex_query", move |b| {
        b.iter(|| {
            let arena = Bump::new();
            let (tokens, errors) = Lexer::new(black_box(QUERY)).lex(&arena);
            assert!(errors.is_empty());
            black_box(tokens.len());
        })
    });
}

fn bench_query_parser(c: &mut Criterion) {
    c.bench_function("parse_query", move |b| {
        b.iter(|| {
            let arena = Bump::new();
            let doc = Parser::new(&arena, black_box(QUERY))
                .parse()
                .expect("query parses");
            black_box(doc.definitions.len());
        })
    });
}

criterion_group!(benches, bench_query_lexer, bench_query_parser);
criterion_main!(benches);
