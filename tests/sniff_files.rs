//! End-to-end classification of files on disk.

use std::io::{Cursor, Write};
use std::path::Path;

use filekind::{FileKind, Sniffer, SniffOptions, detect_file_kind, file_kind_from_file_name};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(data).expect("write entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

fn build_mobi() -> Vec<u8> {
    let mut data = vec![0u8; 78];
    data[..8].copy_from_slice(b"Sample_B");
    data[60..68].copy_from_slice(b"BOOKMOBI");
    data[76..78].copy_from_slice(&1u16.to_be_bytes());
    data.extend_from_slice(&88u32.to_be_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&[0, 0]);
    data.extend_from_slice(&[0x20; 256]);
    data
}

fn write(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("write fixture");
    path
}

#[test]
fn pdf_without_extension() {
    let dir = tempdir().expect("create temp dir");
    let path = write(dir.path(), "scan0001", b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n");
    assert_eq!(detect_file_kind(&path), Some(FileKind::Pdf));
    assert_eq!(file_kind_from_file_name(&path), None);
}

#[test]
fn unpacked_epub_directory() {
    let dir = tempdir().expect("create temp dir");
    let notes = dir.path().join("notes");
    std::fs::create_dir(&notes).expect("create dir");
    write(&notes, "mimetype", b"application/epub+zip");

    assert_eq!(detect_file_kind(&notes), Some(FileKind::Epub));
    assert_eq!(file_kind_from_file_name(&notes), Some(FileKind::Dir));
}

#[test]
fn epub_with_trailing_whitespace_in_mimetype() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[
        ("mimetype", b"application/epub+zip\n   "),
        ("OEBPS/content.opf", b"<package/>"),
    ]);
    let path = write(dir.path(), "book.zip", &data);

    assert_eq!(detect_file_kind(&path), Some(FileKind::Epub));
    // the name still says zip
    assert_eq!(file_kind_from_file_name(&path), Some(FileKind::Zip));
}

#[test]
fn xps_package() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[
        ("[Content_Types].xml", b"<Types/>"),
        ("_rels/.rels", b"<Relationships/>"),
        ("FixedDocSeq.fdseq", b"<FixedDocumentSequence/>"),
    ]);
    let path = write(dir.path(), "print.bin", &data);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Xps));
}

#[test]
fn epub_wins_over_xps() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[
        ("mimetype", b"application/epub+zip"),
        ("_rels/.rels", b"<Relationships/>"),
    ]);
    let path = write(dir.path(), "both.bin", &data);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Epub));
}

#[test]
fn plain_zip() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[("page01.jpg", b"\xFF\xD8\xFF\xE0"), ("page02.jpg", b"\xFF\xD8\xFF\xE0")]);
    let path = write(dir.path(), "comic.cbz", &data);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Zip));
    assert_eq!(file_kind_from_file_name(&path), Some(FileKind::Cbz));
}

#[test]
fn stored_zip_holding_a_pdf_stays_zip() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[("chapter1.pdf", b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n")]);
    assert_eq!(filekind::detect_file_kind_from_bytes(&data), Some(FileKind::Zip));

    let path = write(dir.path(), "chapters.bin", &data);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Zip));
}

#[test]
fn container_inspection_can_be_disabled() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[("mimetype", b"application/epub+zip")]);
    let path = write(dir.path(), "book.epub", &data);

    let sniffer = Sniffer::new(SniffOptions::new().with_container_inspection(false));
    assert_eq!(sniffer.sniff_file(&path), Some(FileKind::Zip));
    assert_eq!(detect_file_kind(&path), Some(FileKind::Epub));
}

#[test]
fn mobipocket_book() {
    let dir = tempdir().expect("create temp dir");
    let path = write(dir.path(), "book.dat", &build_mobi());
    assert_eq!(detect_file_kind(&path), Some(FileKind::Mobi));
}

#[test]
fn postscript_variants() {
    let dir = tempdir().expect("create temp dir");

    let mut ps = b"%!PS-Adobe-3.0\n%%Creator: test\n".to_vec();
    ps.resize(200, b'\n');
    let path = write(dir.path(), "doc", &ps);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Ps));

    let mut pjl = b"\x1B%-12345X@PJL JOB\r\n@PJL ENTER LANGUAGE=POSTSCRIPT\r\n%!PS-Adobe-3.0\r\n".to_vec();
    pjl.resize(200, b'\n');
    let path = write(dir.path(), "job.prn", &pjl);
    assert_eq!(detect_file_kind(&path), Some(FileKind::Ps));
}

#[test]
fn archive_signatures() {
    let dir = tempdir().expect("create temp dir");
    let cases: [(&str, &[u8], FileKind); 4] = [
        ("a", b"Rar!\x1A\x07\x00\xCF\x90\x73\x00\x00", FileKind::Rar),
        ("b", b"7z\xBC\xAF\x27\x1C\x00\x04", FileKind::SevenZip),
        ("c", b"ITSF\x03\x00\x00\x00\x60\x00\x00\x00", FileKind::Chm),
        ("d", b"AT&TFORM\x00\x00\x10\x00DJVU", FileKind::DjVu),
    ];
    for (name, data, expected) in cases {
        let path = write(dir.path(), name, data);
        assert_eq!(detect_file_kind(&path), Some(expected), "{}", name);
    }
}

#[test]
fn unknown_inputs() {
    let dir = tempdir().expect("create temp dir");
    let empty = write(dir.path(), "empty.pdf", b"");
    let text = write(dir.path(), "notes.txt", b"Just some notes, nothing to see here.\n");

    assert_eq!(detect_file_kind(&empty), None);
    assert_eq!(detect_file_kind(&text), None);
    assert_eq!(detect_file_kind(dir.path().join("missing")), None);
    assert_eq!(detect_file_kind(dir.path()), None);
}

#[test]
fn classification_is_idempotent() {
    let dir = tempdir().expect("create temp dir");
    let data = build_zip(&[("mimetype", b"application/epub+zip")]);
    let path = write(dir.path(), "book.epub", &data);

    let first = detect_file_kind(&path);
    assert_eq!(detect_file_kind(&path), first);
    assert_eq!(file_kind_from_file_name(&path), file_kind_from_file_name(&path));
}

#[test]
fn concurrent_classification() {
    let dir = tempdir().expect("create temp dir");
    let path = write(dir.path(), "book.bin", &build_mobi());
    let sniffer = Sniffer::default();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(sniffer.sniff_file(&path), Some(FileKind::Mobi));
                assert_eq!(file_kind_from_file_name("x.JP2"), Some(FileKind::Jp2));
            });
        }
    });
}
