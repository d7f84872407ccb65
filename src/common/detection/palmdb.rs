//! PalmDB (PDB) container parsing and Mobipocket detection.
//!
//! Layout (all integers big-endian):
//!
//! - Bytes 0-31: database name, NUL-padded
//! - Bytes 32-59: attributes, version, timestamps, info offsets
//! - Bytes 60-63: database type (e.g. `BOOK`)
//! - Bytes 64-67: creator id (e.g. `MOBI`)
//! - Bytes 68-75: unique id seed, next record list
//! - Bytes 76-77: number of records
//! - Bytes 78+: record list, 8 bytes per record (offset, attributes, unique id)
//!
//! Only the header and the record list are needed to classify a file, so
//! [`PdbReader::open`] never reads record data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zerocopy::{BE, FromBytes, U16, U32};
use zerocopy_derive::{FromBytes as DeriveFromBytes, Immutable, KnownLayout};

use crate::common::binary::{read_u16_be, read_u32_be};
use crate::common::{Error, Result};

/// Size of the fixed PalmDB header
pub const PDB_HEADER_LEN: usize = 78;

/// Size of one record list entry
pub const PDB_RECORD_ENTRY_LEN: usize = 8;

// timestamps and info offsets are mapped but not needed for identification
#[allow(dead_code)]
#[repr(C)]
#[derive(Debug, Clone, Copy, DeriveFromBytes, Immutable, KnownLayout)]
struct RawPdbHeader {
    name: [u8; 32],
    attributes: U16<BE>,
    version: U16<BE>,
    create_time: U32<BE>,
    modify_time: U32<BE>,
    backup_time: U32<BE>,
    modification_number: U32<BE>,
    app_info_id: U32<BE>,
    sort_info_id: U32<BE>,
    db_type: [u8; 4],
    creator: [u8; 4],
    unique_id_seed: U32<BE>,
    next_record_list: U32<BE>,
    num_records: U16<BE>,
}

/// Parsed PalmDB header fields relevant to format identification.
#[derive(Debug, Clone)]
pub struct PdbHeader {
    /// Database name bytes (up to the first NUL)
    pub name: Vec<u8>,
    /// Database attributes
    pub attributes: u16,
    /// Database version
    pub version: u16,
    /// Type and creator ids, concatenated (e.g. `BOOKMOBI`)
    pub db_type: [u8; 8],
    /// Number of records in the database
    pub num_records: u16,
}

/// A validated PalmDB header plus its record offsets.
#[derive(Debug, Clone)]
pub struct PdbReader {
    header: PdbHeader,
    record_offsets: Vec<u32>,
}

impl PdbReader {
    /// Parse a PalmDB from a complete in-memory file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_prefix(data, data.len() as u64)
    }

    /// Parse a PalmDB header from the file at `path`.
    ///
    /// Reads the fixed header and the record list, nothing else.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let file_len = file.metadata()?.len();

        let mut data = vec![0u8; PDB_HEADER_LEN];
        file.read_exact(&mut data).map_err(|_| Error::InsufficientData {
            expected: PDB_HEADER_LEN,
            available: file_len as usize,
        })?;

        let num_records = read_u16_be(&data, PDB_HEADER_LEN - 2)? as usize;
        let list_len = num_records * PDB_RECORD_ENTRY_LEN;
        data.resize(PDB_HEADER_LEN + list_len, 0);
        file.read_exact(&mut data[PDB_HEADER_LEN..])
            .map_err(|_| Error::InvalidPdb("record list is truncated".to_string()))?;

        Self::parse_prefix(&data, file_len)
    }

    /// Parse from a buffer holding at least the header and record list of a
    /// file that is `file_len` bytes long.
    fn parse_prefix(data: &[u8], file_len: u64) -> Result<Self> {
        let (raw, _) = RawPdbHeader::read_from_prefix(data).map_err(|_| Error::InsufficientData {
            expected: PDB_HEADER_LEN,
            available: data.len(),
        })?;

        let num_records = raw.num_records.get();
        if num_records == 0 {
            return Err(Error::InvalidPdb("database has no records".to_string()));
        }

        let list_end = PDB_HEADER_LEN + num_records as usize * PDB_RECORD_ENTRY_LEN;
        if data.len() < list_end {
            return Err(Error::InvalidPdb("record list is truncated".to_string()));
        }

        let mut record_offsets = Vec::with_capacity(num_records as usize);
        let mut prev = list_end as u32;
        for i in 0..num_records as usize {
            let offset = read_u32_be(data, PDB_HEADER_LEN + i * PDB_RECORD_ENTRY_LEN)?;
            if offset < prev {
                return Err(Error::InvalidPdb(format!(
                    "record {} starts at {} before {}",
                    i, offset, prev
                )));
            }
            if u64::from(offset) > file_len {
                return Err(Error::InvalidPdb(format!(
                    "record {} starts at {} past end of file ({})",
                    i, offset, file_len
                )));
            }
            record_offsets.push(offset);
            prev = offset;
        }

        let name_len = raw.name.iter().position(|&b| b == 0).unwrap_or(raw.name.len());
        let mut db_type = [0u8; 8];
        db_type[..4].copy_from_slice(&raw.db_type);
        db_type[4..].copy_from_slice(&raw.creator);

        Ok(Self {
            header: PdbHeader {
                name: raw.name[..name_len].to_vec(),
                attributes: raw.attributes.get(),
                version: raw.version.get(),
                db_type,
                num_records,
            },
            record_offsets,
        })
    }

    /// The parsed header
    #[inline]
    pub fn header(&self) -> &PdbHeader {
        &self.header
    }

    /// Type and creator ids, e.g. `BOOKMOBI`
    #[inline]
    pub fn db_type(&self) -> &[u8; 8] {
        &self.header.db_type
    }

    /// Number of records
    #[inline]
    pub fn record_count(&self) -> usize {
        self.record_offsets.len()
    }

    /// Start offsets of all records, in file order
    #[inline]
    pub fn record_offsets(&self) -> &[u32] {
        &self.record_offsets
    }
}

/// Document flavours stored in PalmDB containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdbDocType {
    Unknown,
    Mobipocket,
    PalmDoc,
    TealDoc,
    Plucker,
    ISilo,
}

impl PdbDocType {
    /// Map a type+creator id to a document type.
    pub fn from_db_type(db_type: &[u8; 8]) -> Self {
        match db_type {
            b"BOOKMOBI" => Self::Mobipocket,
            b"TEXtREAd" => Self::PalmDoc,
            b"TEXtTlDc" => Self::TealDoc,
            b"DataPlkr" => Self::Plucker,
            b"ToGoToGo" | b"SDocSilX" => Self::ISilo,
            _ => Self::Unknown,
        }
    }
}

/// Check whether `bytes` is a Mobipocket PalmDB.
///
/// Other PalmDoc flavours share the container but are not Mobipocket.
pub fn is_mobi_bytes(bytes: &[u8]) -> bool {
    match PdbReader::parse(bytes) {
        Ok(reader) => PdbDocType::from_db_type(reader.db_type()) == PdbDocType::Mobipocket,
        Err(err) => {
            tracing::trace!(error = %err, "not a PalmDB");
            false
        },
    }
}

/// Check whether the file at `path` is a Mobipocket PalmDB.
pub fn is_mobi_file<P: AsRef<Path>>(path: P) -> bool {
    match PdbReader::open(path) {
        Ok(reader) => PdbDocType::from_db_type(reader.db_type()) == PdbDocType::Mobipocket,
        Err(err) => {
            tracing::trace!(error = %err, "not a PalmDB");
            false
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Build a PalmDB with `record_sizes.len()` records of the given sizes.
    pub(crate) fn build_pdb(name: &str, db_type: &[u8; 8], record_sizes: &[usize]) -> Vec<u8> {
        let mut data = vec![0u8; PDB_HEADER_LEN];
        data[..name.len()].copy_from_slice(name.as_bytes());
        data[60..68].copy_from_slice(db_type);
        data[76..78].copy_from_slice(&(record_sizes.len() as u16).to_be_bytes());

        let mut offset = (PDB_HEADER_LEN + record_sizes.len() * PDB_RECORD_ENTRY_LEN + 2) as u32;
        for (i, size) in record_sizes.iter().enumerate() {
            data.extend_from_slice(&offset.to_be_bytes());
            data.push(0);
            data.extend_from_slice(&(i as u32).to_be_bytes()[1..]);
            offset += *size as u32;
        }
        // two bytes of gap, as written by most tools
        data.extend_from_slice(&[0, 0]);
        for size in record_sizes {
            data.extend(std::iter::repeat_n(0xA5u8, *size));
        }
        data
    }

    #[test]
    fn test_parse_mobi_header() {
        let data = build_pdb("My_Book", b"BOOKMOBI", &[16, 32, 8]);
        let reader = PdbReader::parse(&data).expect("parse pdb");
        assert_eq!(reader.db_type(), b"BOOKMOBI");
        assert_eq!(reader.header().name, b"My_Book");
        assert_eq!(reader.record_count(), 3);
        assert_eq!(reader.record_offsets()[0], 104);
        assert!(is_mobi_bytes(&data));
    }

    #[test]
    fn test_other_palm_doc_types() {
        for (db_type, expected) in [
            (b"TEXtREAd", PdbDocType::PalmDoc),
            (b"TEXtTlDc", PdbDocType::TealDoc),
            (b"DataPlkr", PdbDocType::Plucker),
            (b"ToGoToGo", PdbDocType::ISilo),
            (b"SDocSilX", PdbDocType::ISilo),
            (b"appladdr", PdbDocType::Unknown),
        ] {
            let data = build_pdb("doc", db_type, &[10]);
            let reader = PdbReader::parse(&data).expect("parse pdb");
            assert_eq!(PdbDocType::from_db_type(reader.db_type()), expected);
            assert!(!is_mobi_bytes(&data));
        }
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(PdbReader::parse(b"").is_err());
        assert!(PdbReader::parse(&[0u8; 77]).is_err());

        // no records
        let data = build_pdb("empty", b"BOOKMOBI", &[]);
        assert!(matches!(PdbReader::parse(&data), Err(Error::InvalidPdb(_))));

        // truncated record list
        let data = build_pdb("cut", b"BOOKMOBI", &[4, 4]);
        assert!(PdbReader::parse(&data[..PDB_HEADER_LEN + 4]).is_err());

        // offsets going backwards
        let mut data = build_pdb("back", b"BOOKMOBI", &[4, 4]);
        data[PDB_HEADER_LEN + 8..PDB_HEADER_LEN + 12].copy_from_slice(&1u32.to_be_bytes());
        assert!(PdbReader::parse(&data).is_err());

        // offset past end of file
        let mut data = build_pdb("past", b"BOOKMOBI", &[4]);
        data[PDB_HEADER_LEN..PDB_HEADER_LEN + 4].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(!is_mobi_bytes(&data));
    }

    #[test]
    fn test_open_reads_only_header() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("book.bin");
        std::fs::write(&path, build_pdb("Book", b"BOOKMOBI", &[4096, 4096])).expect("write");

        let reader = PdbReader::open(&path).expect("open pdb");
        assert_eq!(reader.record_count(), 2);
        assert!(is_mobi_file(&path));
        assert!(!is_mobi_file(dir.path().join("missing.mobi")));
    }

    #[test]
    fn test_open_truncated_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("short.pdb");
        std::fs::write(&path, b"BOOKMOBI").expect("write");
        assert!(matches!(
            PdbReader::open(&path),
            Err(Error::InsufficientData { .. })
        ));
    }
}
