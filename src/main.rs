use nalgebra::Point2;
use track_detector::{filter_segments, MergeOptions, Segment, SegmentError};

fn main() -> Result<(), SegmentError> {
    // Demo stub: fakes a handful of fragmented detections from one photo
    // and runs the merge pipeline on them.
    let raw = vec![
        Segment::new(Point2::new(10.0, 10.0), Point2::new(60.0, 60.0), "demo.jpg")?,
        Segment::new(Point2::new(70.0, 70.0), Point2::new(120.0, 120.0), "demo.jpg")?,
        Segment::new(Point2::new(12.0, 12.0), Point2::new(58.0, 58.0), "demo.jpg")?,
        Segment::new(Point2::new(200.0, 40.0), Point2::new(300.0, 42.0), "demo.jpg")?,
    ];

    let raw_count = raw.len();
    let merged = filter_segments(raw, &MergeOptions::default());
    println!("merged {} raw segments into {} tracks", raw_count, merged.len());
    for seg in &merged {
        println!(
            "  ({:.0}, {:.0}) -> ({:.0}, {:.0})  len={:.1} angle={:.1}",
            seg.p0().x,
            seg.p0().y,
            seg.p1().x,
            seg.p1().y,
            seg.length(),
            seg.angle_deg()
        );
    }
    Ok(())
}
