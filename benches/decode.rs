use connwatch::connections::{parse_table, ConnectionRecord, Protocol};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const SAMPLE_ROW: &str = "  4: 0F02000A:A24E 5DB8D822:01BB 01 00000000:00000000 02:00000B18 00000000  1000        0 67890 2 0000000000000000 24 4 30 10 -1";

fn sample_table(rows: usize) -> String {
    let mut table = String::from(
        "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode\n",
    );
    for _ in 0..rows {
        table.push_str(SAMPLE_ROW);
        table.push('\n');
    }
    table
}

fn benchmark_record_decode(c: &mut Criterion) {
    c.bench_function("decode_single_record", |b| {
        b.iter(|| ConnectionRecord::decode(Protocol::Tcp, black_box(SAMPLE_ROW)).unwrap());
    });
}

fn benchmark_table_decode(c: &mut Criterion) {
    let table = sample_table(500);
    c.bench_function("decode_table_500_rows", |b| {
        b.iter(|| {
            for line in parse_table(black_box(&table)) {
                ConnectionRecord::decode(Protocol::Tcp, &line).unwrap();
            }
        });
    });
}

criterion_group!(benches, benchmark_record_decode, benchmark_table_decode);
criterion_main!(benches);
