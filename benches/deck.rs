use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keynote::model::split_slides;
use keynote::presentation::markdown::{Highlighter, MarkdownRenderer, MarkdownTheme};

const SLIDE: &str = r#"# React Hooks

Hooks let you use **state** and other React features without writing a class.

- `useState` keeps local state
- `useEffect` runs side effects
- `useContext` reads a context

> Only call hooks at the top level.

```jsx
function Counter() {
  const [count, setCount] = useState(0);
  return <button onClick={() => setCount(count + 1)}>{count}</button>;
}
```

| Hook | Since |
|------|-------|
| useState | 16.8 |
| useEffect | 16.8 |
"#;

fn deck_source(slides: usize) -> String {
    vec![SLIDE; slides].join("\n\n\n\n")
}

fn split(c: &mut Criterion) {
    let source = deck_source(200);
    c.bench_function("split_slides 200", |b| {
        b.iter(|| split_slides(black_box(&source)))
    });
}

fn render(c: &mut Criterion) {
    let plain = MarkdownRenderer::default();
    c.bench_function("render plain", |b| {
        b.iter(|| plain.render(black_box(SLIDE), black_box(80)))
    });

    let highlighted = MarkdownRenderer::new(
        MarkdownTheme::default(),
        Highlighter::new("base16-ocean.dark"),
    );
    c.bench_function("render highlighted", |b| {
        b.iter(|| highlighted.render(black_box(SLIDE), black_box(80)))
    });
}

criterion_group!(benches, split, render);
criterion_main!(benches);
