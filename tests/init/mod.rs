mod reject_existing_repository;
