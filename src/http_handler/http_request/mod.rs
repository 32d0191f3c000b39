pub mod body_part_values_get;
pub mod collection_values_get;
pub mod image_get;
pub mod manufacturer_values_get;
pub mod modality_values_get;
pub mod new_patients_in_collection_get;
pub mod new_studies_in_patient_collection_get;
pub mod patient_get;
pub mod patient_study_get;
pub mod patients_by_modality_get;
pub mod request_common;
pub mod series_get;
pub mod series_size_get;
pub mod shared_list_get;
pub mod single_image_get;
pub mod sop_instance_uids_get;

#[cfg(test)]
mod tests;
