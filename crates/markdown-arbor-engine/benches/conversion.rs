use criterion::{Criterion, criterion_group, criterion_main};
use markdown_arbor_engine::{markdown_to_html, parsing::blocks::segment, parsing::inline::tokenize};

/// Builds a document with `sections` repetitions of every block type.
fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("# Section {i}\n\n"));
        content.push_str(&format!(
            "Paragraph {i} with **bold**, _italic_, `code` and a [link](https://example.com/{i}).\nIt spans two lines.\n\n"
        ));
        content.push_str("> Quoted text\n> > with a nested **level**\n\n");
        content.push_str("- first item\n- second item\n- third _item_\n\n");
        content.push_str("1. one\n2. two\n3. three\n\n");
        content.push_str("```\nfn main() {\n    println!(\"hi\");\n}\n```\n\n");
    }
    content
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(20);

    for sections in [10, 100] {
        let content = generate_markdown_content(sections);
        group.bench_function(format!("markdown_to_html_{sections}"), |b| {
            b.iter(|| {
                let root = markdown_to_html(std::hint::black_box(&content)).unwrap();
                std::hint::black_box(root.to_html());
            });
        });
    }

    let content = generate_markdown_content(100);
    group.bench_function("segment_100", |b| {
        b.iter(|| std::hint::black_box(segment(std::hint::black_box(&content))));
    });

    let line = "Some **bold** and _italic_ text with `code`, ![img](a.png) and [a](b) ".repeat(20);
    group.bench_function("tokenize_line", |b| {
        b.iter(|| std::hint::black_box(tokenize(std::hint::black_box(&line)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
