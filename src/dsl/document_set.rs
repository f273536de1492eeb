//! The four-slot document set and its value-returning updates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::StudioConfig;
use crate::id::IdGenerator;

use super::schema::{
    CjmDocument, Csf, DocumentKind, DslDocument, EmDocument, Kgi, Kpi, OutcomeDocument,
    SbpDocument,
};

/// Up to four typed documents. Every slot may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub cjm: Option<CjmDocument>,
    pub sbp: Option<SbpDocument>,
    pub outcome: Option<OutcomeDocument>,
    pub em: Option<EmDocument>,
}

/// Borrowed view of one present document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentRef<'a> {
    Cjm(&'a CjmDocument),
    Sbp(&'a SbpDocument),
    Outcome(&'a OutcomeDocument),
    Em(&'a EmDocument),
}

impl DocumentRef<'_> {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRef::Cjm(_) => DocumentKind::Cjm,
            DocumentRef::Sbp(_) => DocumentKind::Sbp,
            DocumentRef::Outcome(_) => DocumentKind::Outcome,
            DocumentRef::Em(_) => DocumentKind::Em,
        }
    }

    pub fn to_owned_document(&self) -> DslDocument {
        match self {
            DocumentRef::Cjm(d) => DslDocument::Cjm((*d).clone()),
            DocumentRef::Sbp(d) => DslDocument::Sbp((*d).clone()),
            DocumentRef::Outcome(d) => DslDocument::Outcome((*d).clone()),
            DocumentRef::Em(d) => DslDocument::Em((*d).clone()),
        }
    }
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of present documents.
    pub fn len(&self) -> usize {
        self.documents().len()
    }

    pub fn contains(&self, kind: DocumentKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn get(&self, kind: DocumentKind) -> Option<DocumentRef<'_>> {
        match kind {
            DocumentKind::Cjm => self.cjm.as_ref().map(DocumentRef::Cjm),
            DocumentKind::Sbp => self.sbp.as_ref().map(DocumentRef::Sbp),
            DocumentKind::Outcome => self.outcome.as_ref().map(DocumentRef::Outcome),
            DocumentKind::Em => self.em.as_ref().map(DocumentRef::Em),
        }
    }

    /// Present documents in canonical order (cjm, sbp, outcome, em).
    pub fn documents(&self) -> Vec<DocumentRef<'_>> {
        DocumentKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .collect()
    }

    /// Place `doc` in its slot, replacing whatever was there.
    pub fn insert(&mut self, doc: DslDocument) -> Option<DslDocument> {
        match doc {
            DslDocument::Cjm(d) => self.cjm.replace(d).map(DslDocument::Cjm),
            DslDocument::Sbp(d) => self.sbp.replace(d).map(DslDocument::Sbp),
            DslDocument::Outcome(d) => self.outcome.replace(d).map(DslDocument::Outcome),
            DslDocument::Em(d) => self.em.replace(d).map(DslDocument::Em),
        }
    }

    /// A new set with `doc` in its slot.
    pub fn with_document(&self, doc: DslDocument) -> DocumentSet {
        let mut next = self.clone();
        next.insert(doc);
        next
    }

    /// A new set with the `kind` slot emptied.
    pub fn without(&self, kind: DocumentKind) -> DocumentSet {
        let mut next = self.clone();
        match kind {
            DocumentKind::Cjm => next.cjm = None,
            DocumentKind::Sbp => next.sbp = None,
            DocumentKind::Outcome => next.outcome = None,
            DocumentKind::Em => next.em = None,
        }
        next
    }

    /// When a service blueprint exists but no outcome document does, return a
    /// set holding a fresh empty outcome. Otherwise the set is returned as is.
    pub fn with_default_outcome(&self, ids: &dyn IdGenerator, config: &StudioConfig) -> DocumentSet {
        if self.sbp.is_none() || self.outcome.is_some() {
            return self.clone();
        }
        tracing::debug!("creating default outcome document");
        self.with_document(scaffold(DocumentKind::Outcome, ids, config))
    }
}

/// An empty document of the given kind with freshly generated ids.
pub fn scaffold(kind: DocumentKind, ids: &dyn IdGenerator, config: &StudioConfig) -> DslDocument {
    let version = config.default_version.clone();
    match kind {
        DocumentKind::Cjm => DslDocument::Cjm(CjmDocument {
            version,
            id: ids.next_id("cjm", "document"),
            persona: None,
            phases: Vec::new(),
            actions: Vec::new(),
            extra: BTreeMap::new(),
        }),
        DocumentKind::Sbp => DslDocument::Sbp(SbpDocument {
            version,
            id: ids.next_id("sbp", "document"),
            lanes: Vec::new(),
            tasks: Vec::new(),
            extra: BTreeMap::new(),
        }),
        DocumentKind::Outcome => {
            let kgi_id = ids.next_id("outcome", "kgi");
            let csf_id = ids.next_id("outcome", "csf");
            DslDocument::Outcome(OutcomeDocument {
                version,
                id: ids.next_id("outcome", "document"),
                kgi: Kgi {
                    id: kgi_id.clone(),
                    name: String::new(),
                },
                primary_csf: Csf {
                    id: csf_id.clone(),
                    kgi_id,
                    source_id: None,
                    rationale: String::new(),
                },
                primary_kpi: Kpi {
                    id: ids.next_id("outcome", "kpi"),
                    csf_id,
                    name: String::new(),
                    definition: None,
                    unit: None,
                    target: 0.0,
                },
                extra: BTreeMap::new(),
            })
        }
        DocumentKind::Em => DslDocument::Em(EmDocument {
            version,
            id: ids.next_id("em", "document"),
            outcomes: Vec::new(),
            actions: Vec::new(),
            skills: Vec::new(),
            knowledge: Vec::new(),
            tools: Vec::new(),
            extra: BTreeMap::new(),
        }),
    }
}
