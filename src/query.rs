//! Pure SPARQL query construction from subject filters.

/// Subject-level filter parameters.
///
/// `age_min <= age_max` is not enforced here: an out-of-order range renders a
/// syntactically valid query whose age filter no subject can satisfy, and the
/// store answers it with zero bindings. Likewise empty `sex` / `image_modal`
/// strings render valid exact-match filters that match nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    /// Inclusive lower age bound.
    pub age_min: f64,
    /// Inclusive upper age bound.
    pub age_max: f64,
    /// Exact-match sex token, case-sensitive.
    pub sex: String,
    /// Exact-match imaging modality term, case-sensitive.
    pub image_modal: String,
}

impl QueryFilter {
    /// Render the SPARQL query for this filter.
    ///
    /// Deterministic and infallible: the four filter values are the only
    /// variable content interpolated into an otherwise fixed template, into
    /// numeric and quoted-literal positions. Matching subjects are aggregated
    /// per dataset.
    pub fn to_sparql(&self) -> String {
        format!(
            r#"PREFIX nb: <http://cohort.example.org/vocab/>

SELECT ?dataset ?dataset_name (COUNT(DISTINCT ?subject) AS ?num_matching_subjects)
WHERE {{
    ?dataset a nb:Dataset;
             nb:label ?dataset_name;
             nb:hasSamples ?subject.
    ?subject a nb:Subject;
             nb:age ?age;
             nb:sex ?sex;
             nb:hasSession/nb:hasAcquisition/nb:hasContrastType ?image_modal.
    FILTER (?age >= {age_min} && ?age <= {age_max}).
    FILTER (?sex = "{sex}").
    FILTER (str(?image_modal) = "{image_modal}").
}}
GROUP BY ?dataset ?dataset_name
"#,
            age_min = self.age_min,
            age_max = self.age_max,
            sex = self.sex,
            image_modal = self.image_modal,
        )
    }
}
