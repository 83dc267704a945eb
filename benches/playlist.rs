use bounded_playlist::{FilteredIterable, Genre, OrderedIterable, Playlist, ScanningOrder, Song};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build(n: u32) -> Playlist {
    let mut playlist = Playlist::new();
    for i in 0..n {
        let genre = Genre::ALL[(i as usize) % Genre::ALL.len()];
        let song = Song::new(
            format!("song-{:04}", n - i),
            format!("artist-{}", i % 7),
            genre,
            60 + (i * 37) % 600,
        );
        let _ = playlist.add(song);
    }
    playlist
}

fn bench_playlist(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("Playlist Add (256)");
        group.bench_function("add", |b| b.iter(|| black_box(build(256))));
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Playlist Snapshot (256)");
        let mut playlist = build(256);

        group.bench_function("insertion order", |b| {
            b.iter(|| black_box(playlist.iter().count()))
        });

        playlist.set_scanning_order(ScanningOrder::ByName);
        group.bench_function("by name", |b| b.iter(|| black_box(playlist.iter().count())));

        playlist.set_scanning_order(ScanningOrder::ByDuration);
        playlist.filter_genre(Some(Genre::Rock));
        playlist.filter_duration(300);
        group.bench_function("by duration, filtered", |b| {
            b.iter(|| black_box(playlist.iter().count()))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_playlist);
criterion_main!(benches);
