use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zasm_lex::lexer::Lexer;
use zasm_lex::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};
use zasm_util::span::Position;

fn bench_logical_line(c: &mut Criterion) {
    let source = format!("{:<71}X\n               ,PARM2,PARM3\n", "LABEL    MAC   PARM1").repeat(200);

    c.bench_function("extract_logical_lines", |b| {
        b.iter(|| {
            let mut input = source.as_str();
            let mut line = LogicalLine::default();
            let mut count = 0usize;
            while extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL) {
                count += line.segments.len();
            }
            black_box(count)
        })
    });
}

fn bench_lexer(c: &mut Criterion) {
    let text = "LABEL    LA    1,TABLE(2)          LOAD TABLE ADDRESS";

    c.bench_function("lex_statement", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new();
            lexer.reset(black_box(text), false, Position::default(), 0, false);
            lexer.lex_all();
            black_box(lexer.token_count())
        })
    });
}

criterion_group!(benches, bench_logical_line, bench_lexer);
criterion_main!(benches);
